//! Floor generation errors.

use thiserror::Error;

/// Errors produced while generating a floor
///
/// Generation is all-or-nothing: no partially generated grid is ever
/// returned alongside an error.
#[derive(Error, Debug, Clone)]
pub enum GenError {
    #[error("invalid floor configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("could not place {target} after {attempts} attempts")]
    PlacementExhausted { target: String, attempts: u32 },
}
