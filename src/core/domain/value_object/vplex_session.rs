/// An established management session.
///
/// VPLEX authenticates every request through the `username`/`password` headers;
/// the session records that those credentials were accepted and carries the
/// session cookie when the array hands one out.
#[derive(Debug, Clone)]
pub struct VplexSession {
    cookie: Option<String>,
}

impl VplexSession {
    pub(crate) fn new(cookie: Option<String>) -> Self {
        Self { cookie }
    }

    /// Returns the session cookie, if the array issued one.
    #[must_use]
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }
}
