use std::env::VarError;
use std::num::ParseIntError;

use crate::docs_gen::DEFAULT_CONCURRENCY;

/// Environment variable that overrides how many documents are processed at once.
pub const MAX_CONCURRENCY_ENV_VAR: &str = "DOCS_LTX_MAX_CONCURRENCY";

/// Same as max_concurrency, but an unset variable falls back to `override_default`, then to the library default.
pub fn get_max_concurrency(override_default: Option<usize>) -> Result<usize, MaxConcurrencyError> {
    match max_concurrency() {
        Ok(v) => Ok(v),
        Err(MaxConcurrencyError::MissingEnvVar(_)) => Ok(override_default.unwrap_or(DEFAULT_CONCURRENCY)),
        Err(e) => Err(e),
    }
}

/// Retrieves the value of the environment variable as a usize for max concurrency.
pub fn max_concurrency() -> Result<usize, MaxConcurrencyError> {
    std::env::var(MAX_CONCURRENCY_ENV_VAR)
        .map_err(|e| e.into())
        .and_then(|v| parse_max_concurrency(&v))
}

/// Parses a max concurrency value, rejecting zero.
pub fn parse_max_concurrency(value: &str) -> Result<usize, MaxConcurrencyError> {
    match value.trim().parse::<usize>()? {
        0 => Err(MaxConcurrencyError::NonPositive),
        n => Ok(n),
    }
}

#[derive(Debug)]
pub enum MaxConcurrencyError {
    ParseIntError(ParseIntError),
    NonPositive,
    MissingEnvVar(VarError),
}

impl std::error::Error for MaxConcurrencyError {}

impl From<ParseIntError> for MaxConcurrencyError {
    fn from(error: ParseIntError) -> Self {
        Self::ParseIntError(error)
    }
}

impl From<VarError> for MaxConcurrencyError {
    fn from(error: VarError) -> Self {
        Self::MissingEnvVar(error)
    }
}

impl std::fmt::Display for MaxConcurrencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Self::ParseIntError(e) => write!(f, "{} is not a valid integer: {}", MAX_CONCURRENCY_ENV_VAR, e),
            Self::NonPositive => write!(f, "{} must be a positive number", MAX_CONCURRENCY_ENV_VAR),
            Self::MissingEnvVar(e) => write!(f, "Environment variable {} is missing: {}", MAX_CONCURRENCY_ENV_VAR, e),
        }
    }
}
