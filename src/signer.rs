//! Local transaction signing.

use alloy::signers::{SignerSync, local::PrivateKeySigner};
use base64::{Engine, engine::general_purpose::STANDARD};
use sha3::{Digest, Sha3_256};

use crate::{
    error::{ConfigError, PayloadError},
    types::{Address, SignedTransaction, Transaction},
};

/// secp256k1 key with its ICON account address.
#[derive(Clone, derive_more::Debug)]
pub struct Wallet {
    address: Address,
    #[debug(skip)]
    signer: PrivateKeySigner,
}

impl Wallet {
    pub fn new(signer: PrivateKeySigner) -> Self {
        // Uncompressed SEC1 point without the 0x04 tag
        let point = signer.credential().verifying_key().to_encoded_point(false);
        let hash = Sha3_256::digest(&point.as_bytes()[1..]);
        Self {
            address: Address::account_from_key_hash(&hash),
            signer,
        }
    }

    /// Hex-encoded private key, `0x` prefix is optional.
    pub fn from_private_key(key: &str) -> Result<Self, ConfigError> {
        let key = key.trim();
        let signer: PrivateKeySigner = key
            .strip_prefix("0x")
            .unwrap_or(key)
            .parse()
            .map_err(|e: alloy::signers::local::LocalSignerError| {
                ConfigError::InvalidPrivateKey(e.to_string())
            })?;
        Ok(Self::new(signer))
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Signs the transaction hash, producing a base64 `r || s || recovery id` signature.
    pub fn sign(&self, transaction: Transaction) -> Result<SignedTransaction, PayloadError> {
        let signature = self
            .signer
            .sign_hash_sync(&transaction.hash())
            .map_err(|e| PayloadError::Signing(e.to_string()))?;

        let mut raw = [0u8; 65];
        raw[..32].copy_from_slice(&signature.r().to_be_bytes::<32>());
        raw[32..64].copy_from_slice(&signature.s().to_be_bytes::<32>());
        raw[64] = signature.v() as u8;

        Ok(SignedTransaction::new(transaction, STANDARD.encode(raw)))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Signature, U256};

    use super::*;
    use crate::types::{CallKind, CallPayload, Params};

    const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn transaction(from: &Address) -> Transaction {
        let payload = CallPayload::new(
            "cx66d4d90f5f113eba575bf793570135f9b10cece1".parse().unwrap(),
            Some(from.clone()),
            "withdrawCollateral",
            Params::from([("_value".to_string(), serde_json::Value::from("0x1"))]),
            CallKind::Transaction { value: U256::ZERO },
        );
        Transaction::from_payload(&payload, from.clone(), 3, U256::from(1_000_000), 1)
    }

    #[test]
    fn test_wallet_address() {
        let wallet = Wallet::from_private_key(KEY).unwrap();
        assert!(wallet.address().as_str().starts_with("hx"));
        assert_eq!(wallet.address().as_str().len(), 42);
        assert_eq!(
            wallet.address(),
            Wallet::from_private_key(&KEY[2..]).unwrap().address()
        );
        assert!(!format!("{wallet:?}").contains(&KEY[2..]));

        assert!(matches!(
            Wallet::from_private_key("0xzz"),
            Err(ConfigError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn test_signature_recovers_signer() {
        let wallet = Wallet::from_private_key(KEY).unwrap();
        let tx = transaction(wallet.address());
        let hash = tx.hash();
        let signed = wallet.sign(tx).unwrap();
        assert_eq!(signed.hash(), hash);

        let raw = STANDARD.decode(signed.signature()).unwrap();
        assert_eq!(raw.len(), 65);
        assert!(raw[64] <= 1);

        let signature = Signature::from_raw(&raw).unwrap();
        let recovered = signature.recover_address_from_prehash(&hash).unwrap();
        assert_eq!(recovered, wallet.signer.address());
    }
}
