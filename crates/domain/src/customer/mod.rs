//! Customer aggregate and its lifecycle.

mod aggregate;
mod events;
pub mod specifications;

pub use aggregate::{Customer, DEFAULT_DEACTIVATION_REASON, Preferences};
pub use events::{CustomerCreatedData, CustomerDeactivatedData, CustomerEvent};
