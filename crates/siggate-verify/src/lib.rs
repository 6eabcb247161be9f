//! Signature verification core for SigGate.
//!
//! Routes each verification request to one of two secp256k1 verification
//! paths — standard ECDSA over hex-encoded keys with structured (r, s)
//! signatures, and a Schnorr-style path over raw-bytes keys with compact
//! signatures — and normalizes every failure into a [`Verdict`].
//!
//! All curve arithmetic wraps established libraries — no custom cryptography.
//!
//! # Key Types
//!
//! - [`SignatureGate`] — Scheme dispatcher; the main entry point
//! - [`Verdict`] — Structured verification outcome with a boolean surface
//! - [`EcdsaSignature`] — Pre-parsed (r, s) signature value
//! - [`SignatureMaterial`] — Opaque signature material, structured or compact

pub mod ecdsa;
pub mod gate;
pub mod schnorr;
pub mod signature;
pub mod verdict;

pub use ecdsa::EcdsaVerifier;
pub use gate::SignatureGate;
pub use schnorr::SchnorrLikeVerifier;
pub use signature::{EcdsaSignature, SignatureError, SignatureMaterial};
pub use verdict::{Fault, Verdict};
