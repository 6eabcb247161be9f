use std::fmt;

use serde::{Deserialize, Serialize};

/// Input that failed shape or parse checks before cryptography could run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fault {
    /// Public key material did not decode or had the wrong shape.
    Key,
    /// Signature material did not decode or was the wrong kind.
    Signature,
    /// Digest was not valid hex or was rejected by the primitive.
    Digest,
}

/// Outcome of a single verification attempt.
///
/// The boolean surface ([`Verdict::is_valid`]) collapses `Rejected` and
/// `Malformed` into `false`: callers cannot tell a junk key from a forged
/// signature there. That merge is deliberate, preserved for compatibility
/// with existing callers; the variants stay separate internally so new
/// callers and diagnostics can tell the two apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Signature is cryptographically valid for the key and digest.
    Valid,
    /// Inputs were well formed but the signature does not validate.
    Rejected,
    /// Key, signature, or digest failed the scheme's shape requirements.
    Malformed(Fault),
}

impl Verdict {
    /// Boolean-compatible surface: `true` only for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Rejected => write!(f, "rejected"),
            Self::Malformed(Fault::Key) => write!(f, "malformed key"),
            Self::Malformed(Fault::Signature) => write!(f, "malformed signature"),
            Self::Malformed(Fault::Digest) => write!(f, "malformed digest"),
        }
    }
}
