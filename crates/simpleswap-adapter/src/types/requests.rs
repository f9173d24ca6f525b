/*
[INPUT]:  Caller-provided operation inputs
[OUTPUT]: Typed request structs consumed by the HTTP wrappers
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new request fields added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Input for `create_exchange`.
///
/// Empty optional strings are not sent. The `client_*` fields are forwarded
/// as headers so upstream can see the end user's context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRequest {
    pub fixed: bool,
    pub currency_from: String,
    pub currency_to: String,
    pub amount: Decimal,
    pub address_to: String,
    pub extra_id_to: String,
    pub user_refund_address: String,
    pub user_refund_extra_id: String,

    pub client_ip: String,
    pub client_user_agent: String,
    pub client_timezone: String,
    pub client_language: String,
}

/// Filters for `get_exchanges`. Zero limit/offset and unset times are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangesRequest {
    pub limit: u32,
    pub offset: u32,
    pub min_time: Option<DateTime<Utc>>,
    pub max_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangesRequest {
    pub fixed: bool,
    pub currency_from: String,
    pub currency_to: String,
}
