pub mod race;

pub use crate::domain::model::{LookupRecord, LookupRequest, Outcome, ProviderFailure};
pub use crate::domain::ports::{Presenter, ProviderAdapter};
pub use crate::utils::error::Result;
