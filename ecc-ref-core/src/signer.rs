//! Schnorr signing boundary.
//!
//! Signatures are produced by a trusted external implementation. The rest of
//! the crate only sees the [`SchnorrSigner`] capability, so the signer can be
//! swapped or mocked without touching the curve arithmetic.

use k256::schnorr::SigningKey;
use log::debug;
use num_bigint::BigUint;
use thiserror::Error;

pub const SIGNATURE_LEN: usize = 64;

#[derive(Error, Debug)]
pub enum SignError {
    #[error("private key does not fit into 32 bytes")]
    PrivateKeyTooWide,
    #[error("message hash does not fit into 32 bytes")]
    MessageHashTooWide,
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(#[source] signature::Error),
    #[error("failed to sign message: {0}")]
    Signing(#[source] signature::Error),
}

pub trait SchnorrSigner {
    fn sign(
        &self,
        private_key: &BigUint,
        message_hash: &BigUint,
    ) -> Result<[u8; SIGNATURE_LEN], SignError>;
}

/// BIP-340 Schnorr signatures over secp256k1, backed by `k256`.
///
/// The auxiliary randomness is fixed to zero, so equal inputs always give
/// equal signatures.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bip340Signer;

impl SchnorrSigner for Bip340Signer {
    fn sign(
        &self,
        private_key: &BigUint,
        message_hash: &BigUint,
    ) -> Result<[u8; SIGNATURE_LEN], SignError> {
        let key_bytes = to_word_bytes(private_key).ok_or(SignError::PrivateKeyTooWide)?;
        let hash_bytes = to_word_bytes(message_hash).ok_or(SignError::MessageHashTooWide)?;

        let signing_key = SigningKey::from_bytes(&key_bytes).map_err(SignError::InvalidPrivateKey)?;
        let signature = signing_key
            .sign_raw(&hash_bytes, &[0u8; 32])
            .map_err(SignError::Signing)?;
        debug!("signed message hash 0x{}", hex::encode(hash_bytes));

        Ok(signature.to_bytes())
    }
}

/// Left-pads `number` to 32 big-endian bytes.
fn to_word_bytes(number: &BigUint) -> Option<[u8; 32]> {
    let raw = number.to_bytes_be();
    if raw.len() > 32 {
        return None;
    }
    let mut bytes = [0u8; 32];
    bytes[32 - raw.len()..].copy_from_slice(&raw);
    Some(bytes)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn word_padding() {
        assert_eq!(to_word_bytes(&BigUint::from(0u32)), Some([0u8; 32]));
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(to_word_bytes(&BigUint::from(1u32)), Some(one));
        assert_eq!(to_word_bytes(&(BigUint::from(1u32) << 256u32)), None);
    }

    #[test]
    fn bip340_vector_zero() {
        // secret key 3, zero message, zero auxiliary randomness
        let signature = Bip340Signer
            .sign(&BigUint::from(3u32), &BigUint::from(0u32))
            .unwrap();
        assert_eq!(
            hex::encode(signature),
            "e907831f80848d1069a5371b402410364bdf1c5f8307b0084c55f1ce2dca8215\
             25f66a4a85ea8b71e482a74f382d2ce5ebeee8fdb2172f477df4900d310536c0"
        );
    }

    #[test]
    fn deterministic() {
        let key = BigUint::from(0x1234_5678u32);
        let hash = BigUint::parse_bytes(b"deadbeef", 16).unwrap();
        let first = Bip340Signer.sign(&key, &hash).unwrap();
        let second = Bip340Signer.sign(&key, &hash).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let hash = BigUint::from(1u32);
        assert!(matches!(
            Bip340Signer.sign(&BigUint::from(0u32), &hash),
            Err(SignError::InvalidPrivateKey(_))
        ));
        let order = BigUint::parse_bytes(
            b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
            16,
        )
        .unwrap();
        assert!(matches!(
            Bip340Signer.sign(&order, &hash),
            Err(SignError::InvalidPrivateKey(_))
        ));
        assert!(matches!(
            Bip340Signer.sign(&(BigUint::from(1u32) << 256u32), &hash),
            Err(SignError::PrivateKeyTooWide)
        ));
        assert!(matches!(
            Bip340Signer.sign(&BigUint::from(1u32), &(BigUint::from(1u32) << 300u32)),
            Err(SignError::MessageHashTooWide)
        ));
    }
}
