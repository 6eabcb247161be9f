use thiserror::Error;

/// The caller requested a signature scheme outside the supported set.
///
/// Unlike every other verification failure, this one is a configuration or
/// programming error rather than a verification outcome, so it surfaces as an
/// explicit error instead of `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported signature scheme: {scheme:?}")]
pub struct UnsupportedScheme {
    /// The unrecognized tag exactly as the caller supplied it.
    pub scheme: String,
}

impl UnsupportedScheme {
    /// Record the tag that failed to match a known scheme.
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }
}
