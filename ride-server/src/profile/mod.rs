//! User profile, preferences and payment methods.

mod payment;
mod preferences;
mod store;

pub use payment::{PaymentKind, PaymentMethod, PaymentMethods};
pub use preferences::{MAX_AUTO_TIP_PERCENT, Preferences, UserProfile};
pub use store::ProfileStore;
