/// Per-request inputs the resolver reads when building its candidate list.
pub trait RequestSource {
    /// Explicit override, e.g. a `?lang=` query parameter.
    fn explicit_lang(&self) -> Option<String>;

    fn session_lang(&self) -> Option<String>;

    /// Raw `Accept-Language` header value.
    fn accept_language(&self) -> Option<String>;
}

/// A source with no request attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequest;

impl RequestSource for NoRequest {
    fn explicit_lang(&self) -> Option<String> {
        None
    }

    fn session_lang(&self) -> Option<String> {
        None
    }

    fn accept_language(&self) -> Option<String> {
        None
    }
}
