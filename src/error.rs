use std::fmt;

/// The only failure the dashboard distinguishes: the window could not be fetched.
///
/// Network errors and non-success statuses both end up here; the inner error is
/// kept for the logs only.
#[derive(Debug)]
pub struct FetchError(anyhow::Error);

impl FetchError {
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        FetchError(err.into())
    }

    pub fn cause(&self) -> &anyhow::Error {
        &self.0
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed: {:#}", self.0)
    }
}

impl std::error::Error for FetchError {}

pub trait FetchErrorExt {
    type Out;
    fn fetch_err(self) -> Self::Out;
}

impl<T, E: Into<anyhow::Error>> FetchErrorExt for Result<T, E> {
    type Out = Result<T, FetchError>;
    fn fetch_err(self) -> Self::Out {
        self.map_err(FetchError::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_any_error() {
        let parsed: Result<u32, _> = "nope".parse::<u32>();
        let err = parsed.fetch_err().unwrap_err();

        assert!(err.to_string().starts_with("fetch failed: "));
        assert!(err.cause().is::<std::num::ParseIntError>());
    }
}
