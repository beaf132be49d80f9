//! Scope name canonicalization.
//!
//! Organization and edition names are human-readable display strings; role
//! strings carry canonical lowercase crowd tokens. The mapping between the
//! two is owned by the directory integration, so the resolver takes it as an
//! injected collaborator.

/// Maps a human-readable scope name to its canonical lowercase crowd token.
pub trait ScopeCanonicalizer {
    /// Canonical token for the given organization or edition name.
    fn canonical_token(&self, name: &str) -> String;
}

impl<F> ScopeCanonicalizer for F
where
    F: Fn(&str) -> String,
{
    fn canonical_token(&self, name: &str) -> String {
        self(name)
    }
}

/// Default convention: lowercase, ASCII alphanumerics only.
///
/// Deployments with a different directory naming scheme inject their own
/// [`ScopeCanonicalizer`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCanonicalizer;

impl ScopeCanonicalizer for DefaultCanonicalizer {
    fn canonical_token(&self, name: &str) -> String {
        name.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
