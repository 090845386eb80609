use thiserror::Error;

/// Error surface of the baseledger client.
///
/// Node-side rejections (non-zero code in a broadcast response) are NOT
/// errors at this level; they are surfaced verbatim inside
/// [`crate::client::BroadcastTxResponse`]. This enum covers everything that
/// prevents a request from completing at all.
#[derive(Debug, Error)]
pub enum Error {
    /// A signing operation was attempted on a client constructed without a
    /// wallet. Raised before any network call.
    #[error("missing wallet: client was constructed without a signing credential")]
    MissingWallet,

    /// Connection failure, timeout, or other transport-level problem.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with a non-success HTTP status.
    #[error("node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A response body could not be deserialized.
    #[error("malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A response parsed as JSON but did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// Key derivation, address encoding, or signing failed.
    #[error("wallet error: {0}")]
    Wallet(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
