//! Order line persistence and lookup.

use std::sync::Arc;

use crate::application::assemblers::OrderLineAssembler;
use crate::domain::entities::{OrderLineRequest, OrderLineResponse};
use crate::domain::repositories::{OrderLineRepository, OrderTransaction};
use crate::error::AppError;

/// Service storing and listing the lines of an order.
pub struct OrderLineService {
    repository: Arc<dyn OrderLineRepository>,
    assembler: OrderLineAssembler,
}

impl OrderLineService {
    pub fn new(repository: Arc<dyn OrderLineRepository>, assembler: OrderLineAssembler) -> Self {
        Self {
            repository,
            assembler,
        }
    }

    /// Builds and stores a line, returning the stored line's id.
    pub async fn save_order_line(&self, request: OrderLineRequest) -> Result<i64, AppError> {
        let line = self.assembler.to_order_line(request);
        let saved = self.repository.create(line).await?;
        Ok(saved.id)
    }

    /// [`save_order_line`](Self::save_order_line) inside an order placement.
    pub async fn save_order_line_in(
        &self,
        tx: &mut dyn OrderTransaction,
        request: OrderLineRequest,
    ) -> Result<i64, AppError> {
        let line = self.assembler.to_order_line(request);
        let saved = tx.create_order_line(line).await?;
        Ok(saved.id)
    }

    /// Lists the lines of an order.
    pub async fn find_all_by_order_id(
        &self,
        order_id: i64,
    ) -> Result<Vec<OrderLineResponse>, AppError> {
        let lines = self.repository.find_all_by_order_id(order_id).await?;
        Ok(lines
            .iter()
            .map(|line| self.assembler.to_order_line_response(line))
            .collect())
    }
}
