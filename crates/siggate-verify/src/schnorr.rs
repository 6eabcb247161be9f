use secp256k1::{ecdsa, Message, PublicKey, Secp256k1, VerifyOnly};
use siggate_types::KeyMaterial;

use crate::signature::SignatureMaterial;
use crate::verdict::{Fault, Verdict};

/// Compressed SEC1 point length.
const COMPRESSED_KEY_LEN: usize = 33;
/// Uncompressed SEC1 point length.
const UNCOMPRESSED_KEY_LEN: usize = 65;

/// Schnorr-style verifier over secp256k1.
///
/// Checks compact 64-byte signatures against raw-bytes public keys using
/// libsecp256k1. The scheme tag is historical: the wire format is a compact
/// signature verified with the ECDSA primitive, as produced by
/// libsecp256k1-style signers.
///
/// The curve context is built once at construction and only read afterwards,
/// so a single verifier is safe to share across threads.
pub struct SchnorrLikeVerifier {
    secp: Secp256k1<VerifyOnly>,
}

impl SchnorrLikeVerifier {
    /// Build a verifier with its own verification-only curve context.
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::verification_only(),
        }
    }

    /// Verify `signature` over the hex-encoded `digest_hex` under `key`.
    ///
    /// Key material must be a raw byte sequence of exactly 33 or 65 bytes;
    /// the check runs before any cryptography. Never fails and never panics:
    /// every parse failure and every primitive error maps to a
    /// non-[`Verdict::Valid`] outcome, with the cause logged at `debug`
    /// level.
    pub fn verify(
        &self,
        key: &KeyMaterial<'_>,
        signature: &SignatureMaterial<'_>,
        digest_hex: &str,
    ) -> Verdict {
        let key_bytes = match key {
            KeyMaterial::Raw(bytes) => *bytes,
            KeyMaterial::Hex(_) => {
                tracing::debug!("schnorr-style verification requires raw key bytes");
                return Verdict::Malformed(Fault::Key);
            }
        };
        if key_bytes.len() != COMPRESSED_KEY_LEN && key_bytes.len() != UNCOMPRESSED_KEY_LEN {
            tracing::debug!(
                len = key_bytes.len(),
                "schnorr-style public key must be 33 or 65 bytes"
            );
            return Verdict::Malformed(Fault::Key);
        }

        let public_key = match PublicKey::from_slice(key_bytes) {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!(%err, "schnorr-style public key is not a valid curve point");
                return Verdict::Malformed(Fault::Key);
            }
        };

        let sig = match signature {
            SignatureMaterial::Compact(bytes) => match ecdsa::Signature::from_compact(bytes) {
                Ok(sig) => sig,
                Err(err) => {
                    tracing::debug!(%err, "compact signature did not parse");
                    return Verdict::Malformed(Fault::Signature);
                }
            },
            SignatureMaterial::Structured(_) => {
                tracing::debug!("schnorr-style verification requires a compact signature");
                return Verdict::Malformed(Fault::Signature);
            }
        };

        let digest = match hex::decode(digest_hex) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(%err, "digest is not valid hex");
                return Verdict::Malformed(Fault::Digest);
            }
        };
        let message = match Message::from_digest_slice(&digest) {
            Ok(message) => message,
            Err(err) => {
                tracing::debug!(%err, "digest rejected by curve primitive");
                return Verdict::Malformed(Fault::Digest);
            }
        };

        match self.secp.verify_ecdsa(&message, &sig, &public_key) {
            Ok(()) => Verdict::Valid,
            Err(err) => {
                tracing::debug!(%err, "schnorr-style signature rejected");
                Verdict::Rejected
            }
        }
    }
}

impl Default for SchnorrLikeVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use secp256k1::SecretKey;

    use super::*;

    const DIGEST: &str = "abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890";

    /// Deterministic secret key: 31 zero bytes then `last`.
    fn secret_key(last: u8) -> SecretKey {
        let mut bytes = [0u8; 32];
        bytes[31] = last;
        SecretKey::from_slice(&bytes).unwrap()
    }

    fn sign(sk: &SecretKey, digest_hex: &str) -> [u8; 64] {
        let secp = Secp256k1::new();
        let digest = hex::decode(digest_hex).unwrap();
        let message = Message::from_digest_slice(&digest).unwrap();
        secp.sign_ecdsa(&message, sk).serialize_compact()
    }

    fn public_key(sk: &SecretKey) -> PublicKey {
        PublicKey::from_secret_key(&Secp256k1::new(), sk)
    }

    #[test]
    fn compressed_key_verifies() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let sig = sign(&sk, DIGEST);
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert_eq!(verdict, Verdict::Valid);
    }

    #[test]
    fn uncompressed_key_verifies() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize_uncompressed();
        let sig = sign(&sk, DIGEST);
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert_eq!(verdict, Verdict::Valid);
    }

    #[test]
    fn bad_key_lengths_are_malformed() {
        let sk = secret_key(1);
        let sig = sign(&sk, DIGEST);
        let verifier = SchnorrLikeVerifier::new();
        for len in [0usize, 32, 64, 66] {
            let key = vec![2u8; len];
            let verdict = verifier.verify(
                &KeyMaterial::Raw(&key),
                &SignatureMaterial::Compact(&sig),
                DIGEST,
            );
            assert_eq!(verdict, Verdict::Malformed(Fault::Key), "length {len}");
        }
    }

    #[test]
    fn hex_key_material_is_malformed() {
        let sk = secret_key(1);
        let pk_hex = hex::encode(public_key(&sk).serialize());
        let sig = sign(&sk, DIGEST);
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Hex(&pk_hex),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert_eq!(verdict, Verdict::Malformed(Fault::Key));
    }

    #[test]
    fn non_curve_point_is_malformed() {
        let sk = secret_key(1);
        let sig = sign(&sk, DIGEST);
        // Right length, but not a point on the curve.
        let junk = [0u8; 33];
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&junk),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert_eq!(verdict, Verdict::Malformed(Fault::Key));
    }

    #[test]
    fn structured_material_is_malformed() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let sig = crate::signature::EcdsaSignature::from_slice(&sign(&sk, DIGEST)).unwrap();
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Structured(&sig),
            DIGEST,
        );
        assert_eq!(verdict, Verdict::Malformed(Fault::Signature));
    }

    #[test]
    fn tampered_digest_not_valid() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let sig = sign(&sk, DIGEST);
        let mut tampered = DIGEST.to_string();
        tampered.pop();
        tampered.push('1');
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            &tampered,
        );
        assert_eq!(verdict, Verdict::Rejected);
    }

    #[test]
    fn tampered_signature_not_valid() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let mut sig = sign(&sk, DIGEST);
        sig[63] ^= 0x01;
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert!(!verdict.is_valid());
    }

    #[test]
    fn wrong_key_rejected() {
        let sk = secret_key(1);
        let other = public_key(&secret_key(2)).serialize();
        let sig = sign(&sk, DIGEST);
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&other),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert_eq!(verdict, Verdict::Rejected);
    }

    #[test]
    fn non_hex_digest_is_malformed() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let sig = sign(&sk, DIGEST);
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            "not-hex",
        );
        assert_eq!(verdict, Verdict::Malformed(Fault::Digest));
    }

    #[test]
    fn short_digest_is_malformed() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let sig = sign(&sk, DIGEST);
        // Valid hex, but 16 bytes: the primitive requires a 32-byte digest.
        let verdict = SchnorrLikeVerifier::new().verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            &DIGEST[..32],
        );
        assert_eq!(verdict, Verdict::Malformed(Fault::Digest));
    }

    #[test]
    fn verification_is_deterministic() {
        let sk = secret_key(1);
        let pk = public_key(&sk).serialize();
        let sig = sign(&sk, DIGEST);
        let verifier = SchnorrLikeVerifier::new();
        let first = verifier.verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        let second = verifier.verify(
            &KeyMaterial::Raw(&pk),
            &SignatureMaterial::Compact(&sig),
            DIGEST,
        );
        assert_eq!(first, second);
    }
}
