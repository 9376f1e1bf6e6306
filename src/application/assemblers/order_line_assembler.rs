//! Order line construction and projection.

use crate::domain::entities::{OrderLine, OrderLineRequest, OrderLineResponse, OrderRef};

/// Converts order-line requests to entities and entities to responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderLineAssembler;

impl OrderLineAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Builds an unsaved order line from a request.
    ///
    /// Both the line id and the embedded order reference are taken from
    /// `request.order_id`. The line id is not a distinct line identity; the
    /// repository assigns one when the line is stored.
    pub fn to_order_line(&self, request: OrderLineRequest) -> OrderLine {
        OrderLine {
            id: request.order_id,
            product_id: request.product_id,
            order: OrderRef::new(request.order_id),
            quantity: request.quantity,
        }
    }

    /// Projects a line to its public id and quantity.
    pub fn to_order_line_response(&self, line: &OrderLine) -> OrderLineResponse {
        OrderLineResponse {
            id: line.id,
            quantity: line.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_order_line_copies_request() {
        let assembler = OrderLineAssembler::new();

        let line = assembler.to_order_line(OrderLineRequest::new(7, 42, 3));

        assert_eq!(line.id, 7);
        assert_eq!(line.product_id, 42);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.order, OrderRef::new(7));
    }

    #[test]
    fn test_to_order_line_response_projects_id_and_quantity() {
        let assembler = OrderLineAssembler::new();
        let line = OrderLine::new(7, 42, OrderRef::new(7), 3);

        let response = assembler.to_order_line_response(&line);

        assert_eq!(response, OrderLineResponse { id: 7, quantity: 3 });
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "id": 7, "quantity": 3 })
        );
    }

    #[test]
    fn test_response_uses_line_id_not_order_id() {
        let assembler = OrderLineAssembler::new();
        let stored = OrderLine::new(101, 42, OrderRef::new(7), 1);

        assert_eq!(assembler.to_order_line_response(&stored).id, 101);
    }

    #[test]
    fn test_request_to_response_scenario() {
        let assembler = OrderLineAssembler::new();
        let request = OrderLineRequest {
            order_id: 7,
            product_id: 42,
            quantity: 3,
        };

        let line = assembler.to_order_line(request);
        assert_eq!(line, OrderLine::new(7, 42, OrderRef::new(7), 3));

        let response = assembler.to_order_line_response(&line);
        assert_eq!(response, OrderLineResponse { id: 7, quantity: 3 });
    }

    #[test]
    fn test_mapping_holds_across_inputs() {
        let assembler = OrderLineAssembler::new();

        for (order_id, product_id, quantity) in [(1, 1, 1), (9, 300, 12), (i64::MAX, 5, i32::MAX)] {
            let request = OrderLineRequest::new(order_id, product_id, quantity);
            let line = assembler.to_order_line(request);

            assert_eq!(line.id, request.order_id);
            assert_eq!(line.order.id, request.order_id);
            assert_eq!(line.product_id, request.product_id);
            assert_eq!(line.quantity, request.quantity);

            let response = assembler.to_order_line_response(&line);
            assert_eq!(response.id, line.id);
            assert_eq!(response.quantity, line.quantity);
        }
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        let assembler = OrderLineAssembler::new();
        let request = OrderLineRequest::new(3, 4, 5);

        assert_eq!(assembler.to_order_line(request), assembler.to_order_line(request));
    }
}
