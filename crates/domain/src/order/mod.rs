//! Order aggregate and its lifecycle.

mod aggregate;
mod events;
mod state;

pub use aggregate::{Order, OrderDetails, TransitionResult};
pub use events::{OrderCancelledData, OrderCreatedData, OrderEvent, OrderStatusChangedData};
pub use state::{DEFAULT_CANCEL_REASON, OrderStatus, OrderTransition};
