use std::fmt;

/// Structured (r, s) ECDSA signature over secp256k1.
///
/// The caller parses signature material into this form before verification;
/// the gate never guesses at signature encodings.
#[derive(Clone, PartialEq, Eq)]
pub struct EcdsaSignature(pub(crate) k256::ecdsa::Signature);

impl EcdsaSignature {
    /// Parse from a fixed 64-byte `r || s` encoding.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        k256::ecdsa::Signature::from_slice(bytes)
            .map(Self)
            .map_err(|_| SignatureError::InvalidEncoding)
    }

    /// Parse from an ASN.1 DER encoding.
    pub fn from_der(bytes: &[u8]) -> Result<Self, SignatureError> {
        k256::ecdsa::Signature::from_der(bytes)
            .map(Self)
            .map_err(|_| SignatureError::InvalidDer)
    }

    /// The 64-byte `r || s` encoding.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out.copy_from_slice(&self.0.to_bytes());
        out
    }
}

impl From<k256::ecdsa::Signature> for EcdsaSignature {
    fn from(sig: k256::ecdsa::Signature) -> Self {
        Self(sig)
    }
}

impl fmt::Debug for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EcdsaSignature({}...)",
            hex::encode(&self.to_bytes()[..8])
        )
    }
}

/// Errors from parsing ECDSA signature material.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid r || s signature encoding")]
    InvalidEncoding,
    #[error("invalid DER signature encoding")]
    InvalidDer,
}

/// Signature material as supplied by the caller.
///
/// Like key material, the representation is scheme-dependent: the ECDSA path
/// requires a pre-parsed structured value, the Schnorr-style path a compact
/// byte encoding. Supplying the wrong kind for a scheme is a malformed-input
/// condition, decided by the verifier that receives it.
#[derive(Clone, Copy, Debug)]
pub enum SignatureMaterial<'a> {
    /// Pre-parsed structured (r, s) value (the ECDSA form).
    Structured(&'a EcdsaSignature),
    /// Compact byte encoding, 64 bytes on the wire (the Schnorr-style form).
    Compact(&'a [u8]),
}
