use serde::{Deserialize, Serialize};

/// Default address of the node's REST (LCD) gateway.
///
/// All client traffic — account lookup, broadcast, module queries — goes
/// through this gateway. Used whenever options are constructed via
/// `Default`.
pub const DEFAULT_REST_ENDPOINT: &str = "http://localhost:1317";

/// Default chain ID for locally run baseledger nodes.
pub const DEFAULT_CHAIN_ID: &str = "baseledger";

/// Configuration for the transaction client.
#[derive(Debug, Clone)]
pub struct TxClientOptions {
    /// REST gateway URL (e.g. "http://localhost:1317")
    pub addr: String,
    /// Chain ID committed into every SignDoc
    pub chain_id: String,
    /// Connection timeout in seconds
    pub connection_timeout: u64,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for TxClientOptions {
    fn default() -> Self {
        Self {
            addr: DEFAULT_REST_ENDPOINT.to_string(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            connection_timeout: 10,
            request_timeout: 30,
        }
    }
}

impl TxClientOptions {
    /// Options pointing at an explicit gateway address, defaults elsewhere.
    pub fn with_addr(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Self::default()
        }
    }
}

/// Configuration for the read-only query client.
#[derive(Debug, Clone)]
pub struct QueryClientOptions {
    /// REST gateway URL (e.g. "http://localhost:1317")
    pub addr: String,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for QueryClientOptions {
    fn default() -> Self {
        Self {
            addr: DEFAULT_REST_ENDPOINT.to_string(),
            request_timeout: 30,
        }
    }
}

impl QueryClientOptions {
    pub fn with_addr(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Self::default()
        }
    }
}

/// A fee coin, amount kept as a string the way the chain renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Transaction fee: coin amounts plus a gas limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: u64,
}

impl Default for StdFee {
    // No fee coins, 200k gas
    fn default() -> Self {
        Self {
            amount: vec![],
            gas: 200_000,
        }
    }
}

/// Per-call options for `sign_and_broadcast`.
#[derive(Debug, Clone, Default)]
pub struct SignAndBroadcastOptions {
    pub fee: StdFee,
    pub memo: Option<String>,
}

impl SignAndBroadcastOptions {
    pub fn new(fee: StdFee) -> Self {
        Self { fee, memo: None }
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = TxClientOptions::default();
        assert_eq!(opts.addr, "http://localhost:1317");
        assert_eq!(opts.chain_id, "baseledger");

        let query_opts = QueryClientOptions::default();
        assert_eq!(query_opts.addr, "http://localhost:1317");
    }

    #[test]
    fn test_explicit_addr_overrides_default() {
        let opts = TxClientOptions::with_addr("http://10.0.0.5:1317");
        assert_eq!(opts.addr, "http://10.0.0.5:1317");
        assert_eq!(opts.chain_id, "baseledger");

        let query_opts = QueryClientOptions::with_addr("http://10.0.0.5:1317");
        assert_eq!(query_opts.addr, "http://10.0.0.5:1317");
    }

    #[test]
    fn test_default_fee() {
        let fee = StdFee::default();
        assert!(fee.amount.is_empty());
        assert_eq!(fee.gas, 200_000);
    }

    #[test]
    fn test_broadcast_options_memo() {
        let opts = SignAndBroadcastOptions::new(StdFee::default()).with_memo("sync 42");
        assert_eq!(opts.memo.as_deref(), Some("sync 42"));
        assert!(SignAndBroadcastOptions::default().memo.is_none());
    }
}
