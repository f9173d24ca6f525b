/*
[INPUT]:  Operation verb, endpoint and typed request fields
[OUTPUT]: Request descriptor consumed by the client dispatcher
[POS]:    HTTP layer - request descriptor and optional-field predicates
[UPDATE]: When wrappers need new ways to attach parameters or headers
*/

use std::collections::BTreeMap;

use reqwest::Method;

use super::endpoint::Endpoint;

/// One logical call: verb, endpoint, parameters and extra headers.
#[derive(Debug, Clone)]
pub(crate) struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) endpoint: Endpoint,
    pub(crate) params: BTreeMap<&'static str, String>,
    pub(crate) headers: BTreeMap<&'static str, String>,
}

impl ApiRequest {
    fn new(method: Method, endpoint: Endpoint) -> Self {
        Self {
            method,
            endpoint,
            params: BTreeMap::new(),
            headers: BTreeMap::new(),
        }
    }

    pub(crate) fn get(endpoint: Endpoint) -> Self {
        Self::new(Method::GET, endpoint)
    }

    pub(crate) fn post(endpoint: Endpoint) -> Self {
        Self::new(Method::POST, endpoint)
    }

    pub(crate) fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.insert(key, value.to_string());
        self
    }

    /// Attach `key` only when `include` holds.
    pub(crate) fn param_if(self, include: bool, key: &'static str, value: impl ToString) -> Self {
        if include { self.param(key, value) } else { self }
    }

    pub(crate) fn param_unless_empty(self, key: &'static str, value: &str) -> Self {
        self.param_if(!value.is_empty(), key, value)
    }

    pub(crate) fn header_unless_empty(mut self, name: &'static str, value: &str) -> Self {
        if !value.is_empty() {
            self.headers.insert(name, value.to_string());
        }
        self
    }

    /// Write verbs carry their parameters in a JSON body.
    pub(crate) fn params_in_body(&self) -> bool {
        self.method == Method::POST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_params_are_skipped() {
        let request = ApiRequest::get(Endpoint::GetExchanges)
            .param_if(false, "limit", 0)
            .param_if(true, "offset", 20)
            .param_unless_empty("gte", "");

        assert_eq!(request.params.len(), 1);
        assert_eq!(request.params.get("offset").map(String::as_str), Some("20"));
        assert!(!request.params_in_body());
    }

    #[test]
    fn test_empty_headers_are_skipped() {
        let request = ApiRequest::post(Endpoint::CreateExchange)
            .header_unless_empty("x-forwarded-for", "")
            .header_unless_empty("x-user-language", "en");

        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.headers.get("x-user-language").map(String::as_str), Some("en"));
        assert!(request.params_in_body());
    }
}
