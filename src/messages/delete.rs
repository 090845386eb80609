use super::MessageBuilder;

/// Removes a baseledger transaction record by its numeric id.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MsgDeleteBaseledgerTransaction {
    #[prost(string, tag = "1")]
    pub creator: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub id: u64,
}

impl MsgDeleteBaseledgerTransaction {
    pub fn new(creator: impl Into<String>, id: u64) -> Self {
        Self {
            creator: creator.into(),
            id,
        }
    }
}

impl MessageBuilder for MsgDeleteBaseledgerTransaction {
    const TYPE_URL: &'static str =
        "/unibrightio.baseledger.baseledger.MsgDeleteBaseledgerTransaction";
}
