use std::str::FromStr;

use siggate_types::{KeyMaterial, Scheme, UnsupportedScheme};

use crate::ecdsa::EcdsaVerifier;
use crate::schnorr::SchnorrLikeVerifier;
use crate::signature::SignatureMaterial;
use crate::verdict::Verdict;

/// Scheme-dispatching signature verification gate.
///
/// Owns one verifier per supported scheme, including the Schnorr-style
/// verifier's curve context. Construction is explicit — there are no
/// process-wide singletons — and a constructed gate is immutable, so one
/// instance can serve unsynchronized concurrent calls.
pub struct SignatureGate {
    ecdsa: EcdsaVerifier,
    schnorr: SchnorrLikeVerifier,
}

impl SignatureGate {
    /// Build a gate with freshly constructed verifiers.
    pub fn new() -> Self {
        Self {
            ecdsa: EcdsaVerifier::new(),
            schnorr: SchnorrLikeVerifier::new(),
        }
    }

    /// Verify under a typed scheme tag, returning the full [`Verdict`].
    ///
    /// Pure routing: inspects nothing but `scheme`, computes nothing, and
    /// mutates nothing.
    pub fn verify(
        &self,
        key: &KeyMaterial<'_>,
        signature: &SignatureMaterial<'_>,
        digest_hex: &str,
        scheme: Scheme,
    ) -> Verdict {
        match scheme {
            Scheme::Ecdsa => self.ecdsa.verify(key, signature, digest_hex),
            Scheme::SchnorrLike => self.schnorr.verify(key, signature, digest_hex),
        }
    }

    /// Verify under a caller-supplied tag string, returning a boolean.
    ///
    /// The tag must match one of the canonical scheme tags exactly
    /// (case-sensitive, no normalization). An unknown tag is a configuration
    /// error and surfaces as `Err`, never as `Ok(false)`; every other
    /// failure — malformed input or cryptographic rejection alike —
    /// collapses to `Ok(false)`.
    pub fn verify_signature(
        &self,
        key: &KeyMaterial<'_>,
        signature: &SignatureMaterial<'_>,
        digest_hex: &str,
        scheme_tag: &str,
    ) -> Result<bool, UnsupportedScheme> {
        let scheme = Scheme::from_str(scheme_tag)?;
        Ok(self.verify(key, signature, digest_hex, scheme).is_valid())
    }
}

impl Default for SignatureGate {
    fn default() -> Self {
        Self::new()
    }
}
