use bech32::{self, Hrp};
use bip32::{ChildNumber, XPrv};
use bip39::Mnemonic;
use ripemd::Ripemd160;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

// Baseledger keeps the Cosmos SDK defaults: HD path m/44'/118'/0'/0/0
// and the "cosmos" account prefix.
const ACCOUNT_ADDRESS_PREFIX: &str = "cosmos";

/// Signing credential for the baseledger chain.
///
/// Derives keys with BIP32 HD derivation from a BIP39 mnemonic and zeroizes
/// private material on drop.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct BaseledgerWallet {
    #[zeroize(skip)] // Public data doesn't need zeroizing
    pub address: String,

    // Private fields with automatic zeroization
    private_key_bytes: [u8; 32],
    public_key_bytes: [u8; 33],
}

impl BaseledgerWallet {
    /// Create a wallet from a BIP39 mnemonic phrase with optional passphrase
    pub fn from_mnemonic(mnemonic_str: &str, passphrase: &str) -> Result<Self> {
        let mnemonic = Mnemonic::parse(mnemonic_str)
            .map_err(|e| Error::Wallet(format!("invalid mnemonic: {}", e)))?;

        let seed = mnemonic.to_seed(passphrase);
        let mut private_key = derive_private_key_bip32(&seed)?;

        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&private_key)
            .map_err(|e| Error::Wallet(format!("invalid derived key: {}", e)))?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);

        let address = account_address(&public_key)?;

        let mut private_key_bytes = [0u8; 32];
        private_key_bytes.copy_from_slice(&private_key);
        private_key.zeroize();

        Ok(Self {
            address,
            private_key_bytes,
            public_key_bytes: public_key.serialize(),
        })
    }

    /// Create a wallet from a BIP39 mnemonic with no passphrase
    pub fn from_mnemonic_no_passphrase(mnemonic_str: &str) -> Result<Self> {
        Self::from_mnemonic(mnemonic_str, "")
    }

    /// Get the private key as a SecretKey (for signing)
    pub fn private_key(&self) -> Result<SecretKey> {
        SecretKey::from_slice(&self.private_key_bytes)
            .map_err(|e| Error::Wallet(format!("invalid private key: {}", e)))
    }

    /// Get the public key as compressed bytes (33 bytes)
    pub fn public_key_compressed(&self) -> [u8; 33] {
        self.public_key_bytes
    }
}

/// Derive the account private key from a seed along the Cosmos HD path.
fn derive_private_key_bip32(seed: &[u8]) -> Result<[u8; 32]> {
    let xprv = XPrv::new(seed)
        .map_err(|e| Error::Wallet(format!("failed to create XPrv from seed: {}", e)))?;

    // m/44'/118'/0'/0/0
    let derived = child(44, true)
        .and_then(|c| xprv.derive_child(c).map_err(derive_err))
        .and_then(|k| child(118, true).and_then(|c| k.derive_child(c).map_err(derive_err)))
        .and_then(|k| child(0, true).and_then(|c| k.derive_child(c).map_err(derive_err)))
        .and_then(|k| child(0, false).and_then(|c| k.derive_child(c).map_err(derive_err)))
        .and_then(|k| child(0, false).and_then(|c| k.derive_child(c).map_err(derive_err)))?;

    Ok(derived.to_bytes())
}

fn child(index: u32, hardened: bool) -> Result<ChildNumber> {
    ChildNumber::new(index, hardened)
        .map_err(|e| Error::Wallet(format!("invalid HD path segment: {}", e)))
}

fn derive_err(e: bip32::Error) -> Error {
    Error::Wallet(format!("failed to derive key: {}", e))
}

/// Generate a bech32 account address from a public key.
///
/// Cosmos SDK address scheme: ripemd160(sha256(compressed_pubkey)) encoded
/// with the chain's account prefix.
fn account_address(public_key: &PublicKey) -> Result<String> {
    let sha = Sha256::digest(public_key.serialize());
    let hash = Ripemd160::digest(sha);

    let hrp = Hrp::parse(ACCOUNT_ADDRESS_PREFIX)
        .map_err(|e| Error::Wallet(format!("invalid bech32 prefix: {}", e)))?;
    bech32::encode::<bech32::Bech32>(hrp, hash.as_slice())
        .map_err(|e| Error::Wallet(format!("bech32 encoding failed: {}", e)))
}
