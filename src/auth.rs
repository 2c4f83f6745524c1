use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
/// Secret string types that redact values in debug output for security.
pub use secrecy::{ExposeSecret, SecretString};

use crate::Result;
use crate::error::Error;

/// Each client can exist in one state at a time, i.e. [`state::Unauthenticated`] or
/// [`state::Authenticated`].
pub mod state {
    use super::SecretString;

    /// The initial state of the client. Requests carry no `Authorization` header.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Unauthenticated;

    /// The elevated state of the client, reached through [`crate::Client::authenticate`].
    ///
    /// Every request made in this state carries `Authorization: Bearer <token>`.
    #[non_exhaustive]
    #[derive(Clone, Debug)]
    pub struct Authenticated {
        /// Personal access token (or OAuth access token) issued by Printify.
        pub(crate) token: SecretString,
    }

    impl Authenticated {
        /// Returns the bearer token.
        #[must_use]
        pub fn token(&self) -> &SecretString {
            &self.token
        }
    }

    /// The client state can only be [`Unauthenticated`] or [`Authenticated`].
    pub trait State: sealed::Sealed + Send + Sync + 'static {}

    impl State for Unauthenticated {}
    impl sealed::Sealed for Unauthenticated {
        fn headers(&self) -> crate::Result<Option<super::HeaderMap>> {
            Ok(None)
        }
    }

    impl State for Authenticated {}
    impl sealed::Sealed for Authenticated {
        fn headers(&self) -> crate::Result<Option<super::HeaderMap>> {
            super::bearer_headers(&self.token).map(Some)
        }
    }

    pub(crate) mod sealed {
        pub trait Sealed {
            /// Headers to attach to every outgoing request in this state.
            fn headers(&self) -> crate::Result<Option<super::super::HeaderMap>>;
        }
    }
}

/// Validates a raw token and wraps it in a [`state::Authenticated`].
pub(crate) fn authenticated(token: String) -> Result<state::Authenticated> {
    if token.trim().is_empty() {
        return Err(Error::validation("authentication token must not be empty"));
    }

    Ok(state::Authenticated {
        token: SecretString::from(token),
    })
}

fn bearer_headers(token: &SecretString) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
    value.set_sensitive(true);

    let mut map = HeaderMap::new();
    map.insert(AUTHORIZATION, value);

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::state::sealed::Sealed as _;
    use super::*;
    use crate::error::{Kind, Validation};

    #[test]
    fn unauthenticated_should_not_add_headers() -> Result<()> {
        let headers = state::Unauthenticated.headers()?;

        assert!(headers.is_none(), "no headers expected before authenticating");
        Ok(())
    }

    #[test]
    fn authenticated_should_add_bearer_header() -> Result<()> {
        let state = authenticated("abc.def".to_owned())?;
        let headers = state.headers()?.unwrap_or_default();

        assert_eq!(
            headers.get(AUTHORIZATION).map(HeaderValue::as_bytes),
            Some(b"Bearer abc.def".as_slice())
        );
        Ok(())
    }

    #[test]
    fn blank_token_should_fail() {
        for token in ["", "   ", "\t\n"] {
            let err = authenticated(token.to_owned()).expect_err("blank token accepted");

            assert_eq!(err.kind(), Kind::Validation);
            assert_eq!(
                err.downcast_ref::<Validation>().map(|v| v.reason.as_str()),
                Some("authentication token must not be empty")
            );
        }
    }

    #[test]
    fn debug_does_not_expose_token() -> Result<()> {
        let state = authenticated("super-secret-token".to_owned())?;
        let debug = format!("{state:?}");

        assert!(
            !debug.contains("super-secret-token"),
            "token leaked in debug output: {debug}"
        );
        Ok(())
    }
}
