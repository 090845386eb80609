mod create;
mod delete;
mod update;

pub use create::MsgCreateBaseledgerTransaction;
pub use delete::MsgDeleteBaseledgerTransaction;
pub use update::MsgUpdateBaseledgerTransaction;

use cosmos_sdk_proto::Any;
use prost::Message;

/// Proto package of the baseledger module; every message type URL lives
/// under this prefix.
pub const MSG_TYPE_PREFIX: &str = "/unibrightio.baseledger.baseledger";

/// Wraps a module message into the `Any` envelope broadcast inside a
/// transaction.
///
/// Implementations are pure and perform no validation beyond type shape;
/// malformed domain data is rejected by the node at broadcast time.
pub trait MessageBuilder: Message + Sized {
    /// Fully qualified type URL identifying the operation.
    const TYPE_URL: &'static str;

    /// Encode this message and tag it with its type URL.
    fn to_any(&self) -> Any {
        Any {
            type_url: Self::TYPE_URL.to_string(),
            value: self.encode_to_vec(),
        }
    }
}

/// Wrap a create payload into its message envelope.
pub fn msg_create_baseledger_transaction(data: &MsgCreateBaseledgerTransaction) -> Any {
    data.to_any()
}

/// Wrap an update payload into its message envelope.
pub fn msg_update_baseledger_transaction(data: &MsgUpdateBaseledgerTransaction) -> Any {
    data.to_any()
}

/// Wrap a delete payload into its message envelope.
pub fn msg_delete_baseledger_transaction(data: &MsgDeleteBaseledgerTransaction) -> Any {
    data.to_any()
}
