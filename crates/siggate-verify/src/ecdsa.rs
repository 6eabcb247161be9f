use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::VerifyingKey;
use siggate_types::KeyMaterial;

use crate::signature::SignatureMaterial;
use crate::verdict::{Fault, Verdict};

/// ECDSA verifier over secp256k1.
///
/// Interprets key material as a SEC1-encoded curve point (hex text or raw
/// bytes) and signature material as a pre-parsed (r, s) value, then checks
/// the signature against the caller-supplied digest with the prehash
/// verification entry point.
///
/// Stateless: the pure-Rust curve arithmetic needs no precomputed context,
/// so the verifier is a zero-sized unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct EcdsaVerifier;

impl EcdsaVerifier {
    /// Build an ECDSA verifier.
    pub fn new() -> Self {
        Self
    }

    /// Verify `signature` over the hex-encoded `digest_hex` under `key`.
    ///
    /// Never fails and never panics: every parse failure and every primitive
    /// error maps to a non-[`Verdict::Valid`] outcome, with the cause logged
    /// at `debug` level.
    pub fn verify(
        &self,
        key: &KeyMaterial<'_>,
        signature: &SignatureMaterial<'_>,
        digest_hex: &str,
    ) -> Verdict {
        let key_bytes = match key {
            KeyMaterial::Hex(s) => match hex::decode(s) {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::debug!(%err, "ecdsa public key is not valid hex");
                    return Verdict::Malformed(Fault::Key);
                }
            },
            KeyMaterial::Raw(bytes) => bytes.to_vec(),
        };

        let verifying_key = match VerifyingKey::from_sec1_bytes(&key_bytes) {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!(%err, "ecdsa public key is not a valid curve point");
                return Verdict::Malformed(Fault::Key);
            }
        };

        let sig = match signature {
            SignatureMaterial::Structured(sig) => *sig,
            SignatureMaterial::Compact(_) => {
                tracing::debug!("ecdsa verification requires a structured (r, s) signature");
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

        match verifying_key.verify_prehash(&digest, &sig.0) {
            Ok(()) => Verdict::Valid,
            Err(err) => {
                tracing::debug!(%err, "ecdsa signature rejected");
                Verdict::Rejected
            }
        }
    }
}
