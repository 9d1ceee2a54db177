mod error;
mod http_mapping;
mod outcome;
mod traits;
mod update;

pub use error::{RepositoryError, Result};
pub use http_mapping::{repository_error_public_message, repository_error_to_status_code};
pub use outcome::classify_affected_rows;
pub use traits::{CarRepository, OrderRepository, PersonRepository};
pub use update::{require_changes, FieldChange, FieldValue, UpdateStatement};
