/*
[INPUT]:  SimpleSwap REST endpoint paths
[OUTPUT]: Typed endpoint identifiers
[POS]:    HTTP layer - fixed endpoint set
[UPDATE]: When the upstream API adds or renames endpoints
*/

use std::fmt;

/// Relative paths exposed by the SimpleSwap REST API.
///
/// `GetEstimated`, `GetPairs` and `GetPair` have no wrapper on
/// [`SimpleSwapClient`](crate::SimpleSwapClient) yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    GetCurrency,
    GetAllCurrencies,
    CreateExchange,
    GetExchange,
    GetExchanges,
    GetRanges,
    GetEstimated,
    GetPairs,
    GetPair,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::GetCurrency => "/get_currency",
            Endpoint::GetAllCurrencies => "/get_all_currencies",
            Endpoint::CreateExchange => "/create_exchange",
            Endpoint::GetExchange => "/get_exchange",
            Endpoint::GetExchanges => "/get_exchanges",
            Endpoint::GetRanges => "/get_ranges",
            Endpoint::GetEstimated => "/get_estimated",
            Endpoint::GetPairs => "/get_pairs",
            Endpoint::GetPair => "/get_pair",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
