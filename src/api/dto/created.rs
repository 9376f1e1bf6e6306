//! Response body for resource creation endpoints.

use serde::{Deserialize, Serialize};

/// Id of a newly created resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}
