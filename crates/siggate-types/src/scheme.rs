use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnsupportedScheme;

/// Signature scheme selected at verification time.
///
/// The set is closed: every dispatch site matches exhaustively, and the only
/// place an unknown scheme can appear is the text boundary ([`Scheme::from_str`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Standard ECDSA over secp256k1: hex-encoded public key, structured
    /// (r, s) signature.
    #[serde(rename = "ecdsa")]
    Ecdsa,
    /// Schnorr-style verification over secp256k1: raw-bytes public key,
    /// compact 64-byte signature.
    #[serde(rename = "schnorr")]
    SchnorrLike,
}

impl Scheme {
    /// All supported schemes.
    pub const ALL: [Scheme; 2] = [Scheme::Ecdsa, Scheme::SchnorrLike];

    /// Canonical tag string for this scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ecdsa => "ecdsa",
            Self::SchnorrLike => "schnorr",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = UnsupportedScheme;

    /// Exact, case-sensitive match on the canonical tags. No normalization,
    /// no default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ecdsa" => Ok(Self::Ecdsa),
            "schnorr" => Ok(Self::SchnorrLike),
            other => Err(UnsupportedScheme::new(other)),
        }
    }
}
