//! Per-client request throttling for `/api`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Milliseconds to replenish one request slot.
const REPLENISH_MS: u64 = 50;
const BURST: u32 = 100;

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Token bucket keyed on the peer IP: bursts of 100, then 20 requests per
/// second. Over-limit requests get `429 Too Many Requests`.
///
/// Needs `ConnectInfo<SocketAddr>`; handler tests build the router without it.
pub fn layer() -> IpGovernorLayer {
    let config = GovernorConfigBuilder::default()
        .per_millisecond(REPLENISH_MS)
        .burst_size(BURST)
        .finish()
        .expect("rate limit constants are non-zero");

    GovernorLayer::new(Arc::new(config))
}
