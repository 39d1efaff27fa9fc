use super::scope::ScopeId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A component required a context that no ancestor provides.
    MissingContext { context: &'static str },
    ScopeNotFound(ScopeId),
}

impl Error {
    pub fn missing_context(context: &'static str) -> Self {
        Error::MissingContext { context }
    }

    pub fn is_missing_context(&self) -> bool {
        matches!(self, Error::MissingContext { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingContext { context } => write!(f, "Not in the {} context", context),
            Error::ScopeNotFound(id) => write!(f, "Scope not found: {:?}", id),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "../../tests/unit/core/error.rs"]
mod tests;
