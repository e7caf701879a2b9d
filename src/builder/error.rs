//! Build errors for the machine builder.

use crate::machine::MachineError;
use thiserror::Error;

/// Errors that can occur when building machines from components.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before building")]
    MissingInitialState,

    #[error(transparent)]
    Invalid(#[from] MachineError),
}
