// Library exports for baseledger_client

pub mod account;
pub mod client;
pub mod config;
pub mod error;
pub mod messages;
pub mod query;
pub mod tx_builder;
pub mod wallet;

// Re-export main types for convenience
pub use client::{BroadcastTxResponse, TxClient};
pub use config::{
    Coin, QueryClientOptions, SignAndBroadcastOptions, StdFee, TxClientOptions,
};
pub use error::{Error, Result};
pub use messages::{
    msg_create_baseledger_transaction, msg_delete_baseledger_transaction,
    msg_update_baseledger_transaction, MessageBuilder, MsgCreateBaseledgerTransaction,
    MsgDeleteBaseledgerTransaction, MsgUpdateBaseledgerTransaction,
};
pub use query::{PageRequest, QueryClient};
pub use wallet::BaseledgerWallet;
