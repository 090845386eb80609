use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use cosmos_sdk_proto::Any;
use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::account::{account_info_from_json, AccountInfo};
use crate::config::{SignAndBroadcastOptions, TxClientOptions};
use crate::error::{Error, Result};
use crate::messages::{
    MessageBuilder, MsgCreateBaseledgerTransaction, MsgDeleteBaseledgerTransaction,
    MsgUpdateBaseledgerTransaction,
};
use crate::tx_builder::TxBuilder;
use crate::wallet::BaseledgerWallet;

/// Result of a broadcast, whether the node accepted the transaction or not.
///
/// A non-zero `code` means the node rejected the transaction; the code and
/// `raw_log` are surfaced verbatim rather than converted into an error.
#[derive(Debug, Clone)]
pub struct BroadcastTxResponse {
    pub txhash: String,
    pub code: u32,
    pub raw_log: String,
    pub height: u64,
}

impl BroadcastTxResponse {
    pub fn is_accepted(&self) -> bool {
        self.code == 0
    }
}

/// Transaction client for the baseledger module.
///
/// A facade over the node's REST gateway: wraps module messages into
/// envelopes, signs batches with the configured wallet and broadcasts them.
/// The wallet is optional so read paths can be exercised without one;
/// signing operations on a wallet-less client fail with
/// [`Error::MissingWallet`] before any network call.
pub struct TxClient {
    options: TxClientOptions,
    http: reqwest::Client,
    wallet: Option<BaseledgerWallet>,
}

impl TxClient {
    /// Create a client without touching the network.
    pub fn new(wallet: Option<BaseledgerWallet>, options: TxClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(options.request_timeout))
            .connect_timeout(Duration::from_secs(options.connection_timeout))
            .build()?;

        Ok(Self {
            options,
            http,
            wallet,
        })
    }

    /// Create a client and establish the signing context.
    ///
    /// When a wallet is supplied this fetches its account once so a broken
    /// gateway address fails here instead of on the first broadcast. Fresh
    /// accounts that the chain has never seen are fine.
    pub async fn connect(
        wallet: Option<BaseledgerWallet>,
        options: TxClientOptions,
    ) -> Result<Self> {
        let client = Self::new(wallet, options)?;

        if let Some(wallet) = &client.wallet {
            let account = client.query_account(&wallet.address).await?;
            log::info!(
                "connected to {} as {} (account {}, sequence {})",
                client.options.addr,
                wallet.address,
                account.account_number,
                account.sequence
            );
        }

        Ok(client)
    }

    /// Address of the configured wallet, if any.
    pub fn address(&self) -> Option<&str> {
        self.wallet.as_ref().map(|w| w.address.as_str())
    }

    /// Sign `messages` as one transaction and broadcast it.
    ///
    /// The whole batch is signed atomically under a fresh account sequence;
    /// envelope order is preserved. Concurrent calls on the same wallet are
    /// not synchronized here, so racing callers can observe sequence
    /// mismatches from the node.
    pub async fn sign_and_broadcast(
        &self,
        messages: Vec<Any>,
        options: &SignAndBroadcastOptions,
    ) -> Result<BroadcastTxResponse> {
        let wallet = self.wallet.as_ref().ok_or(Error::MissingWallet)?;

        let account = self.query_account(&wallet.address).await?;
        log::debug!(
            "signing {} message(s) with account {} sequence {}",
            messages.len(),
            account.account_number,
            account.sequence
        );

        let builder = TxBuilder::new(
            self.options.chain_id.clone(),
            account.account_number,
            account.sequence,
            wallet,
        );
        let tx_bytes = builder.build_tx(
            messages,
            &options.fee,
            options.memo.as_deref().unwrap_or(""),
        )?;

        self.broadcast_tx(tx_bytes).await
    }

    /// Query account number and sequence for an address.
    ///
    /// Accounts unknown to the chain yet come back as number 0 / sequence 0,
    /// which is what a first transaction must be signed with.
    pub async fn query_account(&self, address: &str) -> Result<AccountInfo> {
        let url = format!(
            "{}/cosmos/auth/v1beta1/accounts/{}",
            self.options.addr, address
        );

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            log::info!("account {} not found on chain, using defaults", address);
            return Ok(AccountInfo {
                address: address.to_string(),
                ..AccountInfo::default()
            });
        }

        let body: Value = into_success_json(response).await?;
        let account = body
            .get("account")
            .ok_or_else(|| Error::UnexpectedResponse("missing account object".to_string()))?;

        let mut info = account_info_from_json(account)?;
        if info.address.is_empty() {
            info.address = address.to_string();
        }
        Ok(info)
    }

    /// Broadcast encoded TxRaw bytes in sync mode.
    pub async fn broadcast_tx(&self, tx_bytes: Vec<u8>) -> Result<BroadcastTxResponse> {
        let url = format!("{}/cosmos/tx/v1beta1/txs", self.options.addr);
        log::debug!(
            "broadcasting {} byte transaction: {}",
            tx_bytes.len(),
            hex::encode(&tx_bytes)
        );

        let request = json!({
            "tx_bytes": BASE64.encode(&tx_bytes),
            "mode": "BROADCAST_MODE_SYNC",
        });

        let response = self.http.post(&url).json(&request).send().await?;
        let body: Value = into_success_json(response).await?;

        let result = parse_broadcast_response(&body)?;
        if result.is_accepted() {
            log::info!("transaction accepted: {}", result.txhash);
        } else {
            log::warn!(
                "transaction rejected with code {}: {}",
                result.code,
                result.raw_log
            );
        }
        Ok(result)
    }

    /// Wrap a create payload into its message envelope.
    pub fn msg_create_baseledger_transaction(&self, data: &MsgCreateBaseledgerTransaction) -> Any {
        data.to_any()
    }

    /// Wrap an update payload into its message envelope.
    pub fn msg_update_baseledger_transaction(&self, data: &MsgUpdateBaseledgerTransaction) -> Any {
        data.to_any()
    }

    /// Wrap a delete payload into its message envelope.
    pub fn msg_delete_baseledger_transaction(&self, data: &MsgDeleteBaseledgerTransaction) -> Any {
        data.to_any()
    }
}

/// Fail on non-2xx statuses, surfacing the body; parse JSON otherwise.
pub(crate) async fn into_success_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}

/// Extract the broadcast result from a `tx_response` body.
///
/// Rejections (non-zero code) are data, not errors; only a structurally
/// unusable body fails.
fn parse_broadcast_response(body: &Value) -> Result<BroadcastTxResponse> {
    let tx_response = body
        .get("tx_response")
        .ok_or_else(|| Error::UnexpectedResponse("missing tx_response".to_string()))?;

    let txhash = tx_response
        .get("txhash")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::UnexpectedResponse("missing txhash".to_string()))?
        .to_string();

    let code = tx_response
        .get("code")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;
    let raw_log = tx_response
        .get("raw_log")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    // Height comes back as a decimal string; zero until the tx is in a block
    let height = match tx_response.get("height") {
        Some(Value::String(s)) => s.parse::<u64>().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    };

    Ok(BroadcastTxResponse {
        txhash,
        code,
        raw_log,
        height,
    })
}
