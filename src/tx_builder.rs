use cosmos_sdk_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use cosmos_sdk_proto::cosmos::crypto::secp256k1::PubKey;
use cosmos_sdk_proto::cosmos::tx::signing::v1beta1::SignMode;
use cosmos_sdk_proto::cosmos::tx::v1beta1::{
    mode_info, AuthInfo, Fee, ModeInfo, SignDoc, SignerInfo, TxBody, TxRaw,
};
use cosmos_sdk_proto::Any;
use prost::Message;

use crate::config::StdFee;
use crate::error::Result;
use crate::wallet::{BaseledgerWallet, TransactionSigner};

/// Assembles and signs a single SIGN_MODE_DIRECT transaction.
///
/// One builder per (account_number, sequence) pair; callers fetch fresh
/// account state before constructing one.
pub struct TxBuilder<'a> {
    chain_id: String,
    account_number: u64,
    sequence: u64,
    wallet: &'a BaseledgerWallet,
    signer: TransactionSigner,
}

impl<'a> TxBuilder<'a> {
    pub fn new(
        chain_id: String,
        account_number: u64,
        sequence: u64,
        wallet: &'a BaseledgerWallet,
    ) -> Self {
        Self {
            chain_id,
            account_number,
            sequence,
            wallet,
            signer: TransactionSigner::new(),
        }
    }

    /// Build a signed transaction carrying `messages` in the given order.
    ///
    /// Returns the encoded TxRaw bytes ready for broadcast.
    pub fn build_tx(&self, messages: Vec<Any>, fee: &StdFee, memo: &str) -> Result<Vec<u8>> {
        // 1. TxBody with the message envelopes, order preserved
        let tx_body = TxBody {
            messages,
            memo: memo.to_string(),
            timeout_height: 0,
            extension_options: vec![],
            non_critical_extension_options: vec![],
        };

        // 2. Fee
        let fee = Fee {
            amount: fee
                .amount
                .iter()
                .map(|c| ProtoCoin {
                    denom: c.denom.clone(),
                    amount: c.amount.clone(),
                })
                .collect(),
            gas_limit: fee.gas,
            payer: String::new(),
            granter: String::new(),
        };

        // 3. Signer info with the compressed secp256k1 public key
        let pub_key = PubKey {
            key: self.wallet.public_key_compressed().to_vec(),
        };
        let pub_key_any = Any {
            type_url: "/cosmos.crypto.secp256k1.PubKey".to_string(),
            value: pub_key.encode_to_vec(),
        };

        let signer_info = SignerInfo {
            public_key: Some(pub_key_any),
            mode_info: Some(ModeInfo {
                sum: Some(mode_info::Sum::Single(mode_info::Single {
                    mode: SignMode::Direct as i32,
                })),
            }),
            sequence: self.sequence,
        };

        let auth_info = AuthInfo {
            signer_infos: vec![signer_info],
            fee: Some(fee),
            tip: None,
        };

        // 4. SignDoc over the encoded body and auth info
        let body_bytes = tx_body.encode_to_vec();
        let auth_info_bytes = auth_info.encode_to_vec();

        let sign_doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.chain_id.clone(),
            account_number: self.account_number,
        };

        // 5. Sign and assemble TxRaw
        let private_key = self.wallet.private_key()?;
        let signature = self
            .signer
            .sign_sign_doc(&sign_doc.encode_to_vec(), &private_key)?;

        let tx_raw = TxRaw {
            body_bytes,
            auth_info_bytes,
            signatures: vec![signature],
        };

        Ok(tx_raw.encode_to_vec())
    }
}
