mod keys;
mod signer;

pub use keys::BaseledgerWallet;
pub use signer::TransactionSigner;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_and_signer_roundtrip() {
        let mnemonic =
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        let wallet = BaseledgerWallet::from_mnemonic_no_passphrase(mnemonic).unwrap();

        assert!(wallet.address.starts_with("cosmos1"));

        let signer = TransactionSigner::new();
        let signature = signer
            .sign_sign_doc(b"payload", &wallet.private_key().unwrap())
            .unwrap();
        assert_eq!(signature.len(), 64);
    }
}
