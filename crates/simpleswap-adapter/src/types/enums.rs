/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Pricing mode of an exchange.
///
/// Values upstream adds later are kept verbatim in `Other`; a missing or
/// empty value is `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExchangeType {
    Fixed,
    Floating,
    Other(String),
    #[default]
    Unknown,
}

impl ExchangeType {
    pub fn as_str(&self) -> &str {
        match self {
            ExchangeType::Fixed => "fixed",
            ExchangeType::Floating => "floating",
            ExchangeType::Other(raw) => raw,
            ExchangeType::Unknown => "",
        }
    }
}

impl From<String> for ExchangeType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "fixed" => ExchangeType::Fixed,
            "floating" => ExchangeType::Floating,
            "" => ExchangeType::Unknown,
            _ => ExchangeType::Other(raw),
        }
    }
}

impl From<ExchangeType> for String {
    fn from(kind: ExchangeType) -> Self {
        match kind {
            ExchangeType::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Lifecycle status of an exchange.
///
/// Statuses upstream adds later are kept verbatim in `Other`; a missing or
/// empty value is `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExchangeStatus {
    Waiting,
    Confirming,
    Exchanging,
    Sending,
    Finished,
    Failed,
    Refunded,
    Expired,
    Verifying,
    Other(String),
    #[default]
    Unknown,
}

impl ExchangeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ExchangeStatus::Waiting => "waiting",
            ExchangeStatus::Confirming => "confirming",
            ExchangeStatus::Exchanging => "exchanging",
            ExchangeStatus::Sending => "sending",
            ExchangeStatus::Finished => "finished",
            ExchangeStatus::Failed => "failed",
            ExchangeStatus::Refunded => "refunded",
            ExchangeStatus::Expired => "expired",
            ExchangeStatus::Verifying => "verifying",
            ExchangeStatus::Other(raw) => raw,
            ExchangeStatus::Unknown => "",
        }
    }

    /// No further transitions are expected upstream.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExchangeStatus::Finished
                | ExchangeStatus::Failed
                | ExchangeStatus::Refunded
                | ExchangeStatus::Expired
        )
    }
}

impl From<String> for ExchangeStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "waiting" => ExchangeStatus::Waiting,
            "confirming" => ExchangeStatus::Confirming,
            "exchanging" => ExchangeStatus::Exchanging,
            "sending" => ExchangeStatus::Sending,
            "finished" => ExchangeStatus::Finished,
            "failed" => ExchangeStatus::Failed,
            "refunded" => ExchangeStatus::Refunded,
            "expired" => ExchangeStatus::Expired,
            "verifying" => ExchangeStatus::Verifying,
            "" => ExchangeStatus::Unknown,
            _ => ExchangeStatus::Other(raw),
        }
    }
}

impl From<ExchangeStatus> for String {
    fn from(status: ExchangeStatus) -> Self {
        match status {
            ExchangeStatus::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}
