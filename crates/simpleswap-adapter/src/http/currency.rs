/*
[INPUT]:  Currency symbols
[OUTPUT]: Currency metadata
[POS]:    HTTP layer - currency endpoints
[UPDATE]: When adding currency endpoints or changing query parameters
*/

use crate::http::endpoint::Endpoint;
use crate::http::request::ApiRequest;
use crate::http::{Result, SimpleSwapClient};
use crate::types::Currency;

impl SimpleSwapClient {
    /// Query a single currency
    ///
    /// GET /get_currency?symbol={symbol}
    pub async fn get_currency(&self, symbol: &str) -> Result<Currency> {
        let request = ApiRequest::get(Endpoint::GetCurrency).param("symbol", symbol);
        self.send(request).await
    }

    /// List every currency supported by upstream
    ///
    /// GET /get_all_currencies
    pub async fn get_all_currencies(&self) -> Result<Vec<Currency>> {
        self.send(ApiRequest::get(Endpoint::GetAllCurrencies)).await
    }
}
