/*
[INPUT]:  Exchange creation inputs, exchange ids, listing filters and currency pairs
[OUTPUT]: Exchange records and amount ranges
[POS]:    HTTP layer - exchange and range endpoints
[UPDATE]: When adding exchange endpoints or changing parameter mapping
*/

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde_json::Value;

use crate::http::endpoint::Endpoint;
use crate::http::request::ApiRequest;
use crate::http::{Result, SimpleSwapClient, SimpleSwapError};
use crate::types::{Exchange, ExchangeRequest, ExchangesRequest, Ranges, RangesRequest};

const HEADER_FORWARDED_FOR: &str = "x-forwarded-for";
const HEADER_USER_LANGUAGE: &str = "x-user-language";
const HEADER_USER_TIMEZONE: &str = "x-user-timezone";
const HEADER_USER_AGENT: &str = "x-user-agent";

impl SimpleSwapClient {
    /// Create a new exchange
    ///
    /// POST /create_exchange
    pub async fn create_exchange(&self, req: &ExchangeRequest) -> Result<Exchange> {
        self.send(req.to_api_request()).await
    }

    /// Query a single exchange
    ///
    /// GET /get_exchange?id={id}
    pub async fn get_exchange(&self, exchange_id: &str) -> Result<Exchange> {
        let request = ApiRequest::get(Endpoint::GetExchange).param("id", exchange_id);
        self.send(request).await
    }

    /// List exchanges created with this API key
    ///
    /// GET /get_exchanges?limit={limit}&offset={offset}&gte={min_time}&lte={max_time}
    pub async fn get_exchanges(&self, req: &ExchangesRequest) -> Result<Vec<Exchange>> {
        self.send(req.to_api_request()).await
    }

    /// Query the allowed amount range for a pair
    ///
    /// GET /get_ranges?fixed={fixed}&currency_from={from}&currency_to={to}
    pub async fn get_ranges(&self, req: &RangesRequest) -> Result<Ranges> {
        let request = ApiRequest::get(Endpoint::GetRanges)
            .param("fixed", req.fixed)
            .param("currency_from", &req.currency_from)
            .param("currency_to", &req.currency_to);

        let raw: Option<BTreeMap<String, Value>> = self.send(request).await?;
        parse_ranges(raw)
    }
}

impl ExchangeRequest {
    pub(crate) fn to_api_request(&self) -> ApiRequest {
        ApiRequest::post(Endpoint::CreateExchange)
            .param("fixed", self.fixed)
            .param("currency_from", &self.currency_from)
            .param("currency_to", &self.currency_to)
            .param("amount", self.amount)
            .param("address_to", &self.address_to)
            .param_unless_empty("extra_id_to", &self.extra_id_to)
            .param_unless_empty("user_refund_address", &self.user_refund_address)
            .param_unless_empty("user_refund_extra_id", &self.user_refund_extra_id)
            .header_unless_empty(HEADER_FORWARDED_FOR, &self.client_ip)
            .header_unless_empty(HEADER_USER_LANGUAGE, &self.client_language)
            .header_unless_empty(HEADER_USER_TIMEZONE, &self.client_timezone)
            .header_unless_empty(HEADER_USER_AGENT, &self.client_user_agent)
    }
}

impl ExchangesRequest {
    pub(crate) fn to_api_request(&self) -> ApiRequest {
        let mut request = ApiRequest::get(Endpoint::GetExchanges)
            .param_if(self.limit != 0, "limit", self.limit)
            .param_if(self.offset != 0, "offset", self.offset);

        if let Some(min_time) = self.min_time {
            request = request.param("gte", min_time.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        if let Some(max_time) = self.max_time {
            request = request.param("lte", max_time.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        request
    }
}

/// Turn the loosely typed `/get_ranges` payload into [`Ranges`].
///
/// Bounds may arrive as numeric strings or plain numbers; a missing or null
/// bound stays zero. Strings must be bare floats, surrounding whitespace is
/// rejected. A null or empty payload is an error.
fn parse_ranges(raw: Option<BTreeMap<String, Value>>) -> Result<Ranges> {
    let raw = match raw {
        Some(map) if !map.is_empty() => map,
        _ => return Err(SimpleSwapError::local("error fetching ranges", "unknown error")),
    };

    Ok(Ranges {
        minimum: parse_bound(&raw, "min")?,
        maximum: parse_bound(&raw, "max")?,
    })
}

fn parse_bound(raw: &BTreeMap<String, Value>, key: &str) -> Result<f64> {
    let context = format!("error marshalling result ({key})");
    match raw.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::String(text)) => text
            .parse::<f64>()
            .map_err(|err| SimpleSwapError::local(&context, err)),
        Some(Value::Number(number)) => number
            .as_f64()
            .ok_or_else(|| SimpleSwapError::local(&context, "number out of range")),
        Some(other) => Err(SimpleSwapError::local(
            &context,
            format!("unexpected value {other}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn map(value: Value) -> Option<BTreeMap<String, Value>> {
        serde_json::from_value(value).expect("range payload")
    }

    #[test]
    fn test_parse_ranges_from_strings() {
        let ranges = parse_ranges(map(json!({"min": "0.001", "max": "10.5"}))).expect("ranges");
        assert_eq!(
            ranges,
            Ranges {
                minimum: 0.001,
                maximum: 10.5
            }
        );
    }

    #[test]
    fn test_parse_ranges_from_numbers_and_null_max() {
        let ranges = parse_ranges(map(json!({"min": 0.25, "max": null}))).expect("ranges");
        assert_eq!(ranges.minimum, 0.25);
        assert_eq!(ranges.maximum, 0.0);
    }

    #[test]
    fn test_parse_ranges_rejects_non_numeric_min() {
        let err = parse_ranges(map(json!({"min": "abc", "max": "10"}))).expect_err("must fail");
        assert!(err.is_local());
        assert!(err.description.contains("error marshalling result (min)"));
    }

    #[test]
    fn test_parse_ranges_rejects_non_numeric_max() {
        let err = parse_ranges(map(json!({"min": "1", "max": "lots"}))).expect_err("must fail");
        assert!(err.description.starts_with("error marshalling result (max): "));
    }

    #[test]
    fn test_parse_ranges_rejects_padded_bound() {
        let err = parse_ranges(map(json!({"min": " 0.5", "max": "10"}))).expect_err("must fail");
        assert!(err.is_local());
        assert!(err.description.starts_with("error marshalling result (min): "));
    }

    #[test]
    fn test_parse_ranges_rejects_empty_payload() {
        for raw in [None, map(json!({}))] {
            let err = parse_ranges(raw).expect_err("must fail");
            assert!(err.is_local());
            assert_eq!(err.description, "error fetching ranges: unknown error");
        }
    }

    #[test]
    fn test_exchange_request_minimal_has_no_headers() {
        let req = ExchangeRequest {
            currency_from: "btc".to_string(),
            currency_to: "eth".to_string(),
            amount: Decimal::new(5, 1),
            ..ExchangeRequest::default()
        };

        let request = req.to_api_request();

        assert!(request.headers.is_empty());
        assert!(request.params_in_body());
        assert_eq!(request.params.get("fixed").map(String::as_str), Some("false"));
        assert_eq!(request.params.get("amount").map(String::as_str), Some("0.5"));
        assert!(!request.params.contains_key("extra_id_to"));
        assert!(!request.params.contains_key("user_refund_address"));
    }

    #[test]
    fn test_exchange_request_maps_client_context_headers() {
        let req = ExchangeRequest {
            client_ip: "203.0.113.7".to_string(),
            client_user_agent: "Mozilla/5.0".to_string(),
            client_timezone: "Europe/Berlin".to_string(),
            client_language: "de".to_string(),
            ..ExchangeRequest::default()
        };

        let headers = req.to_api_request().headers;

        assert_eq!(headers.get("x-forwarded-for").map(String::as_str), Some("203.0.113.7"));
        assert_eq!(headers.get("x-user-agent").map(String::as_str), Some("Mozilla/5.0"));
        assert_eq!(headers.get("x-user-timezone").map(String::as_str), Some("Europe/Berlin"));
        assert_eq!(headers.get("x-user-language").map(String::as_str), Some("de"));
    }

    #[test]
    fn test_exchanges_request_omits_unset_filters() {
        let request = ExchangesRequest::default().to_api_request();
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_exchanges_request_formats_time_window() {
        let req = ExchangesRequest {
            limit: 10,
            offset: 0,
            min_time: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            max_time: Some(Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap()),
        };

        let params = req.to_api_request().params;

        assert_eq!(params.get("limit").map(String::as_str), Some("10"));
        assert!(!params.contains_key("offset"));
        assert_eq!(params.get("gte").map(String::as_str), Some("2024-01-01T00:00:00Z"));
        assert_eq!(params.get("lte").map(String::as_str), Some("2024-02-01T12:30:00Z"));
    }
}
