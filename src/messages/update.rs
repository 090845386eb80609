use super::MessageBuilder;

/// Replaces the payload of an existing baseledger transaction record.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgUpdateBaseledgerTransaction {
    #[prost(string, tag = "1")]
    pub creator: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub id: u64,
    #[prost(string, tag = "3")]
    pub baseledger_transaction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub payload: ::prost::alloc::string::String,
}

impl MsgUpdateBaseledgerTransaction {
    pub fn new(
        creator: impl Into<String>,
        id: u64,
        baseledger_transaction_id: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            creator: creator.into(),
            id,
            baseledger_transaction_id: baseledger_transaction_id.into(),
            payload: payload.into(),
        }
    }
}

impl MessageBuilder for MsgUpdateBaseledgerTransaction {
    const TYPE_URL: &'static str =
        "/unibrightio.baseledger.baseledger.MsgUpdateBaseledgerTransaction";
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_envelope_round_trip() {
        let msg = MsgUpdateBaseledgerTransaction::new(
            "cosmos1creator",
            42,
            "7b245cfa-2ca5-4f1c-9810-7e1ae0a71a44",
            "updated payload",
        );

        let envelope = msg.to_any();
        assert_eq!(envelope.type_url, MsgUpdateBaseledgerTransaction::TYPE_URL);

        let decoded = MsgUpdateBaseledgerTransaction::decode(envelope.value.as_slice()).unwrap();
        assert_eq!(decoded, msg);
        assert_eq!(decoded.id, 42);
    }
}
