pub mod cefr;
pub mod error;
pub mod role;
pub mod tier;

pub use cefr::{CefrLevel, Locale};
pub use error::AuthoringError;
pub use role::StaffRole;
pub use tier::SubscriptionTier;
