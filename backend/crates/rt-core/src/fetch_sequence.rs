//! Guard against applying superseded fetch results.
//!
//! Every fetch takes a token from [`FetchSequence::begin`]. When the response
//! arrives, [`FetchSequence::accept`] hands the value back only if no newer
//! fetch was started in the meantime.

/// Identifies one fetch in a [`FetchSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding all earlier tokens.
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Returns `Some(value)` if `token` is still the latest fetch.
    pub fn accept<T>(&self, token: RequestToken, value: T) -> Option<T> {
        self.is_current(token).then_some(value)
    }
}
