/*
[INPUT]:  Post-processed API payloads
[OUTPUT]: Typed Rust response structs
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Allowed amount range for a currency pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranges {
    #[serde(rename = "min")]
    pub minimum: f64,
    #[serde(rename = "max")]
    pub maximum: f64,
}
