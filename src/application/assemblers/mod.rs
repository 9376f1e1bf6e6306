//! Stateless translators between order data shapes.
//!
//! Assemblers perform no I/O and no validation; they are `Copy` unit structs
//! owned by the services that use them and safe to share across tasks.

pub mod order_confirmation_assembler;
pub mod order_line_assembler;

pub use order_confirmation_assembler::OrderConfirmationAssembler;
pub use order_line_assembler::OrderLineAssembler;
