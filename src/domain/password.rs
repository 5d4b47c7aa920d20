use secrecy::Secret;

/// Password as submitted by the client. Never stored; see
/// [`UserPasswordHash`](super::UserPasswordHash).
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn new(s: Secret<String>) -> Self {
        Self(s)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
