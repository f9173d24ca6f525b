/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{ExchangeStatus, ExchangeType};
use super::serde_helpers::{deserialize_optional_decimal, null_as_default, serialize_optional_decimal};

/// Currency metadata as returned by `/get_currency` and `/get_all_currencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    #[serde(deserialize_with = "null_as_default")]
    pub network: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contract_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub has_extra_id: bool,
    /// Label of the extra id (memo, destination tag) when `has_extra_id` is set.
    #[serde(deserialize_with = "null_as_default")]
    pub extra_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub warnings_from: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub warnings_to: Vec<String>,
    /// Regex the upstream uses to validate addresses.
    #[serde(deserialize_with = "null_as_default")]
    pub validation_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub validation_extra: String,
    /// URL template, `{}` is replaced with the address.
    #[serde(deserialize_with = "null_as_default")]
    pub address_explorer: String,
    /// URL template, `{}` is replaced with the tx hash.
    #[serde(deserialize_with = "null_as_default")]
    pub tx_explorer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub confirmations_from: String,
    #[serde(rename = "isFiat", deserialize_with = "null_as_default")]
    pub is_fiat: bool,
}

/// Currency objects for both legs of an exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeCurrencies {
    #[serde(deserialize_with = "null_as_default")]
    pub currency_from_ticker: Currency,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_to_ticker: Currency,
}

/// Exchange record as returned by `/create_exchange`, `/get_exchange` and `/get_exchanges`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exchange {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub exchange_type: ExchangeType,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub valid_until: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency_to: String,
    #[serde(
        deserialize_with = "deserialize_optional_decimal",
        serialize_with = "serialize_optional_decimal"
    )]
    pub amount_from: Option<Decimal>,
    #[serde(
        deserialize_with = "deserialize_optional_decimal",
        serialize_with = "serialize_optional_decimal"
    )]
    pub expected_amount: Option<Decimal>,
    #[serde(
        deserialize_with = "deserialize_optional_decimal",
        serialize_with = "serialize_optional_decimal"
    )]
    pub amount_to: Option<Decimal>,
    /// Deposit address generated by upstream.
    #[serde(deserialize_with = "null_as_default")]
    pub address_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address_to: String,
    #[serde(deserialize_with = "null_as_default")]
    pub extra_id_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub extra_id_to: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_refund_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_refund_extra_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tx_to: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: ExchangeStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub redirect_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currencies: ExchangeCurrencies,
}

impl Exchange {
    pub fn is_fixed(&self) -> bool {
        self.exchange_type == ExchangeType::Fixed
    }
}
