use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinateError {
    #[error("malformed coordinate literal: expected at least 2 components, found {found}")]
    MissingComponent { found: usize },

    #[error("malformed coordinate literal: component {index} ({token:?}) is not an integer")]
    InvalidComponent {
        index: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown direction {0:?}")]
pub struct ParseDirectionError(pub String);
