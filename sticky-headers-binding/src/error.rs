use thiserror::Error;

/// A list host is wired to an adapter the binding cannot drive.
///
/// Both variants are configuration mistakes, not runtime conditions to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("no adapter attached to the list host; binding works only with {expected}")]
    MissingAdapter { expected: &'static str },
    #[error("binding works only with {expected}")]
    AdapterMismatch { expected: &'static str },
}

pub type Result<T> = std::result::Result<T, BindingError>;
