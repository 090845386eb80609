use uuid::Uuid;

use super::MessageBuilder;

/// Records a new baseledger transaction on chain.
///
/// The transaction id is a UUID chosen client-side; the chain assigns the
/// numeric record id on execution. The payload is an opaque string — the
/// proxying layer typically stores an encrypted business-object blob here.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgCreateBaseledgerTransaction {
    #[prost(string, tag = "1")]
    pub creator: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub baseledger_transaction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub payload: ::prost::alloc::string::String,
}

impl MsgCreateBaseledgerTransaction {
    /// Create message with a freshly generated transaction UUID.
    pub fn new(creator: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::with_transaction_id(creator, Uuid::new_v4().to_string(), payload)
    }

    /// Create message with a caller-supplied transaction id.
    pub fn with_transaction_id(
        creator: impl Into<String>,
        baseledger_transaction_id: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            creator: creator.into(),
            baseledger_transaction_id: baseledger_transaction_id.into(),
            payload: payload.into(),
        }
    }
}

impl MessageBuilder for MsgCreateBaseledgerTransaction {
    const TYPE_URL: &'static str =
        "/unibrightio.baseledger.baseledger.MsgCreateBaseledgerTransaction";
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_envelope_round_trip() {
        let msg = MsgCreateBaseledgerTransaction::with_transaction_id(
            "cosmos1creator",
            "7b245cfa-2ca5-4f1c-9810-7e1ae0a71a44",
            "encrypted payload",
        );

        let envelope = msg.to_any();
        assert_eq!(envelope.type_url, MsgCreateBaseledgerTransaction::TYPE_URL);

        let decoded = MsgCreateBaseledgerTransaction::decode(envelope.value.as_slice()).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn test_new_generates_unique_transaction_ids() {
        let a = MsgCreateBaseledgerTransaction::new("cosmos1creator", "p");
        let b = MsgCreateBaseledgerTransaction::new("cosmos1creator", "p");

        assert_ne!(a.baseledger_transaction_id, b.baseledger_transaction_id);
        assert!(Uuid::parse_str(&a.baseledger_transaction_id).is_ok());
    }
}
