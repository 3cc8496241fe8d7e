//! Self-validating immutable values.

mod address;
mod email;
mod money;
mod phone_number;

pub use address::{Address, AddressParts};
pub use email::Email;
pub use money::Money;
pub use phone_number::{DEFAULT_COUNTRY_CODE, PhoneNumber};
