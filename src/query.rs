use std::time::Duration;

use serde::Deserialize;

use crate::client::into_success_json;
use crate::config::QueryClientOptions;
use crate::error::{Error, Result};

/// REST route of the baseledger module on the gateway.
pub const MODULE_QUERY_PATH: &str = "unibrightio/baseledger/baseledger";

/// A baseledger transaction record as rendered by the REST gateway.
///
/// uint64 fields arrive as decimal strings, so `id` stays a string here;
/// parse it when a numeric id is needed.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseledgerTransaction {
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub id: String,
    #[serde(
        rename = "BaseledgerTransactionId",
        alias = "baseledgerTransactionId",
        alias = "baseledger_transaction_id",
        default
    )]
    pub baseledger_transaction_id: String,
    #[serde(rename = "Payload", alias = "payload", default)]
    pub payload: String,
}

/// Pagination parameters for list queries.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    /// Opaque continuation key from a previous response (base64)
    pub key: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub count_total: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PageResponse {
    pub next_key: Option<String>,
    pub total: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryAllBaseledgerTransactionResponse {
    #[serde(
        rename = "BaseledgerTransaction",
        alias = "baseledgerTransaction",
        default
    )]
    pub baseledger_transaction: Vec<BaseledgerTransaction>,
    #[serde(default)]
    pub pagination: PageResponse,
}

#[derive(Debug, Clone, Deserialize)]
struct QueryGetBaseledgerTransactionResponse {
    #[serde(rename = "BaseledgerTransaction", alias = "baseledgerTransaction")]
    baseledger_transaction: BaseledgerTransaction,
}

/// Node identity reported by the gateway, used as a connectivity probe.
#[derive(Debug, Clone)]
pub struct NodeInfo {
    pub chain_id: String,
    pub node_version: String,
}

/// Read-only query client for the baseledger module.
///
/// No signing, no mutation; every method is a single HTTP GET against the
/// gateway and all failures are transport/HTTP-level.
pub struct QueryClient {
    options: QueryClientOptions,
    http: reqwest::Client,
}

impl QueryClient {
    /// Create a client without touching the network.
    pub fn new(options: QueryClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.request_timeout))
            .build()?;

        Ok(Self { options, http })
    }

    /// Create a client and probe the gateway once.
    pub async fn connect(options: QueryClientOptions) -> Result<Self> {
        let client = Self::new(options)?;
        let info = client.node_info().await?;
        log::info!(
            "connected to {} (chain {}, version {})",
            client.options.addr,
            info.chain_id,
            info.node_version
        );
        Ok(client)
    }

    /// List baseledger transaction records.
    pub async fn baseledger_transaction_all(
        &self,
        pagination: Option<&PageRequest>,
    ) -> Result<QueryAllBaseledgerTransactionResponse> {
        let url = format!(
            "{}/{}/BaseledgerTransaction",
            self.options.addr, MODULE_QUERY_PATH
        );

        let mut request = self.http.get(&url);
        if let Some(page) = pagination {
            if let Some(key) = &page.key {
                request = request.query(&[("pagination.key", key.as_str())]);
            }
            if let Some(offset) = page.offset {
                request = request.query(&[("pagination.offset", offset.to_string())]);
            }
            if let Some(limit) = page.limit {
                request = request.query(&[("pagination.limit", limit.to_string())]);
            }
            if page.count_total {
                request = request.query(&[("pagination.count_total", "true")]);
            }
        }

        let body = into_success_json(request.send().await?).await?;
        let response: QueryAllBaseledgerTransactionResponse = serde_json::from_value(body)?;
        log::debug!(
            "listed {} baseledger transaction(s)",
            response.baseledger_transaction.len()
        );
        Ok(response)
    }

    /// Fetch a single baseledger transaction record by numeric id.
    pub async fn baseledger_transaction(&self, id: u64) -> Result<BaseledgerTransaction> {
        let url = format!(
            "{}/{}/BaseledgerTransaction/{}",
            self.options.addr, MODULE_QUERY_PATH, id
        );

        let body = into_success_json(self.http.get(&url).send().await?).await?;
        let response: QueryGetBaseledgerTransactionResponse = serde_json::from_value(body)?;
        Ok(response.baseledger_transaction)
    }

    /// Query node identity from the gateway.
    pub async fn node_info(&self) -> Result<NodeInfo> {
        let url = format!(
            "{}/cosmos/base/tendermint/v1beta1/node_info",
            self.options.addr
        );

        let body = into_success_json(self.http.get(&url).send().await?).await?;
        let chain_id = body
            .pointer("/default_node_info/network")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| Error::UnexpectedResponse("missing node network".to_string()))?
            .to_string();
        let node_version = body
            .pointer("/application_version/version")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(NodeInfo {
            chain_id,
            node_version,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_gateway_address() {
        let client = QueryClient::new(QueryClientOptions::default()).unwrap();
        assert_eq!(client.options.addr, "http://localhost:1317");

        let client = QueryClient::new(QueryClientOptions::with_addr("http://node:1317")).unwrap();
        assert_eq!(client.options.addr, "http://node:1317");
    }

    #[test]
    fn test_parse_list_response() {
        let body = json!({
            "BaseledgerTransaction": [
                {
                    "creator": "cosmos1creator",
                    "id": "0",
                    "BaseledgerTransactionId": "7b245cfa-2ca5-4f1c-9810-7e1ae0a71a44",
                    "Payload": "blob one"
                },
                {
                    "creator": "cosmos1creator",
                    "id": "1",
                    "BaseledgerTransactionId": "0e1c9a86-53b8-4d30-9d8c-3a2d33a0d8c2",
                    "Payload": "blob two"
                }
            ],
            "pagination": { "next_key": null, "total": "2" }
        });

        let response: QueryAllBaseledgerTransactionResponse =
            serde_json::from_value(body).unwrap();
        assert_eq!(response.baseledger_transaction.len(), 2);
        assert_eq!(response.baseledger_transaction[1].id, "1");
        assert_eq!(response.baseledger_transaction[1].payload, "blob two");
        assert_eq!(response.pagination.total.as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_single_response() {
        let body = json!({
            "BaseledgerTransaction": {
                "creator": "cosmos1creator",
                "id": "7",
                "BaseledgerTransactionId": "7b245cfa-2ca5-4f1c-9810-7e1ae0a71a44",
                "Payload": "blob"
            }
        });

        let response: QueryGetBaseledgerTransactionResponse =
            serde_json::from_value(body).unwrap();
        assert_eq!(response.baseledger_transaction.id, "7");
        assert_eq!(
            response.baseledger_transaction.baseledger_transaction_id,
            "7b245cfa-2ca5-4f1c-9810-7e1ae0a71a44"
        );
    }

    #[test]
    fn test_parse_list_response_camel_case_gateway() {
        // Newer gateways render proto JSON names instead of original names
        let body = json!({
            "baseledgerTransaction": [
                {
                    "creator": "cosmos1creator",
                    "id": "3",
                    "baseledgerTransactionId": "0e1c9a86-53b8-4d30-9d8c-3a2d33a0d8c2",
                    "payload": "blob"
                }
            ],
            "pagination": { "next_key": null, "total": "1" }
        });

        let response: QueryAllBaseledgerTransactionResponse =
            serde_json::from_value(body).unwrap();
        assert_eq!(response.baseledger_transaction.len(), 1);
        assert_eq!(response.baseledger_transaction[0].payload, "blob");
    }
}
