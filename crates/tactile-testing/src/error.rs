use tactile_core::{Role, ViewId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no {role} found with name {name}")]
    NotFound { role: Role, name: String },

    #[error("found {count} elements with role {role} and name {name}; expected exactly one")]
    MultipleMatches {
        role: Role,
        name: String,
        count: usize,
    },

    #[error("invalid name pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("element {id} is no longer mounted")]
    Detached { id: ViewId },
}

pub type QueryResult<T> = Result<T, QueryError>;
