/// Source of the bearer token attached to backend requests.
pub trait TokenStore {
    /// Current token, if one is stored. Absence is not an error.
    fn read_token(&self) -> Option<String>;
}

/// Store that never yields a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenStore for NoToken {
    fn read_token(&self) -> Option<String> {
        None
    }
}

/// Fixed token, mostly useful in tests.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl TokenStore for StaticToken {
    fn read_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
