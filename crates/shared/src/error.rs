use thiserror::Error;

/// Local input rejection raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name must not be empty")]
    EmptyName,
    #[error("price must be a non-negative number")]
    InvalidPrice,
}
