//! Foundation types for the SigGate verification gate.
//!
//! This crate provides the scheme tag, key material container, and
//! input-boundary error shared by the SigGate crates.
//!
//! # Key Types
//!
//! - [`Scheme`] — Closed set of supported signature schemes
//! - [`KeyMaterial`] — Opaque, scheme-agnostic public key material
//! - [`UnsupportedScheme`] — The one failure that must never collapse into a
//!   boolean verification result

pub mod error;
pub mod material;
pub mod scheme;

pub use error::UnsupportedScheme;
pub use material::KeyMaterial;
pub use scheme::Scheme;
