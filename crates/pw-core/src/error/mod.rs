use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid wizard step: {value} {location}")]
    InvalidWizardStep {
        value: String,
        location: ErrorLocation,
    },

    #[error("Remote error: {message} {location}")]
    Remote {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a remote-call error with location
    #[track_caller]
    pub fn remote<S: Into<String>>(message: S) -> Self {
        CoreError::Remote {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
