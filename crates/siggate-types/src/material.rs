/// Public key material as supplied by the caller.
///
/// The representation is scheme-dependent: ECDSA keys arrive as hex-encoded
/// curve points, Schnorr-style keys as raw byte sequences. The container
/// itself performs no validation; each verifier decides which representations
/// it accepts and what shape they must have.
///
/// Material is borrowed for the duration of a single verification call and
/// never outlives it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyMaterial<'a> {
    /// Hex-encoded curve point (the canonical ECDSA form).
    Hex(&'a str),
    /// Raw byte sequence (the canonical Schnorr-style form).
    Raw(&'a [u8]),
}

impl<'a> KeyMaterial<'a> {
    /// The hex text, if this material is hex-encoded.
    pub fn as_hex(&self) -> Option<&'a str> {
        match self {
            Self::Hex(s) => Some(s),
            Self::Raw(_) => None,
        }
    }

    /// The raw bytes, if this material is a byte sequence.
    pub fn as_raw(&self) -> Option<&'a [u8]> {
        match self {
            Self::Raw(b) => Some(b),
            Self::Hex(_) => None,
        }
    }
}
