//! Generation request body and default resolution

use crate::algorithm::executor::SynthesisConfig;
use crate::io::configuration::{DEFAULT_ATTEMPTS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::io::error::{Result, invalid_parameter};
use serde::Deserialize;

/// JSON body of a generation request; every field is optional
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Output width in cells; absent or zero means the default
    pub width: Option<i64>,
    /// Output height in cells; absent or zero means the default
    pub height: Option<i64>,
    /// Solver attempt budget; absent or zero means the default
    pub attempts: Option<i64>,
    /// Seed for reproducible output
    pub seed: Option<u64>,
}

impl GenerationRequest {
    /// Parse a request body
    ///
    /// # Errors
    ///
    /// Returns [`crate::SynthesisError::MalformedRequest`] if the body is not
    /// a JSON object with integer fields
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Apply defaults, using `fallback_seed` when no seed was given
    ///
    /// # Errors
    ///
    /// Returns an error if a field is negative
    pub fn resolve(&self, fallback_seed: u64) -> Result<SynthesisConfig> {
        Ok(SynthesisConfig {
            width: or_default("width", self.width, DEFAULT_WIDTH)?,
            height: or_default("height", self.height, DEFAULT_HEIGHT)?,
            max_attempts: or_default("attempts", self.attempts, DEFAULT_ATTEMPTS)?,
            seed: self.seed.unwrap_or(fallback_seed),
        })
    }
}

/// Parse a request body and apply defaults
///
/// # Errors
///
/// Returns an error if the body is malformed or a field is negative
pub fn parse_request(body: &[u8], fallback_seed: u64) -> Result<SynthesisConfig> {
    GenerationRequest::from_json(body)?.resolve(fallback_seed)
}

// Zero counts as unset
fn or_default(parameter: &'static str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None | Some(0) => Ok(default),
        Some(value) if value < 0 => Err(invalid_parameter(
            parameter,
            &value,
            &"must not be negative",
        )),
        Some(value) => {
            usize::try_from(value).map_err(|e| invalid_parameter(parameter, &value, &e))
        }
    }
}
