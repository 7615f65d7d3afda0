//! Caller identity resolution from bearer credentials.
//!
//! The verifier owns the full failure surface of §"who is calling": a missing
//! header, a header that is not a bearer credential, a token the codec
//! rejects, and a token whose subject claim is absent all collapse into the
//! same client-visible authentication failure.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::ports::TokenCodec;
use crate::domain::user::{UserId, Username};

/// Client-visible message for every authentication failure.
pub const TOKEN_MISSING_OR_INVALID: &str = "token missing or invalid";

/// The authenticated caller, reconstructed per request.
///
/// Ephemeral by design: derived from a verified credential and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: Username,
    user_id: UserId,
}

impl Identity {
    /// Build an identity from verified components.
    pub fn new(username: Username, user_id: UserId) -> Self {
        Self { username, user_id }
    }

    /// Username carried by the credential.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Store identifier of the caller.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// Resolves an `Authorization` header value into an [`Identity`].
///
/// Verification is side-effect-free and never touches the store; resolving
/// the identifier to a full user record is the caller's job.
#[derive(Clone)]
pub struct IdentityVerifier {
    codec: Arc<dyn TokenCodec>,
}

impl IdentityVerifier {
    /// Build a verifier over the given token codec.
    pub fn new(codec: Arc<dyn TokenCodec>) -> Self {
        Self { codec }
    }

    /// Resolve the caller or fail with an authentication error.
    ///
    /// `header` is the raw `Authorization` header value, when the request
    /// carried one.
    pub fn resolve(&self, header: Option<&str>) -> Result<Identity, Error> {
        let token = bearer_token(header).ok_or_else(Self::unauthorized)?;
        let claims = self
            .codec
            .verify(token)
            .map_err(|_| Self::unauthorized())?;
        let subject = claims.subject.ok_or_else(Self::unauthorized)?;
        let user_id = UserId::new(subject).map_err(|_| Self::unauthorized())?;
        let username = Username::new(claims.username).map_err(|_| Self::unauthorized())?;
        Ok(Identity::new(username, user_id))
    }

    /// Resolve the caller, treating every failure as anonymity.
    ///
    /// Used where a credential is optional and a bad one must not reject the
    /// request.
    pub fn resolve_lenient(&self, header: Option<&str>) -> Option<Identity> {
        self.resolve(header).ok()
    }

    fn unauthorized() -> Error {
        Error::unauthorized(TOKEN_MISSING_OR_INVALID)
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme comparison is case-insensitive; everything else about the shape
/// is strict.
fn bearer_token(header: Option<&str>) -> Option<&str> {
    let value = header?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FixtureTokenCodec, TokenClaims};
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn verifier() -> IdentityVerifier {
        IdentityVerifier::new(Arc::new(FixtureTokenCodec))
    }

    fn fixture_token(subject: Option<&str>, username: &str) -> String {
        FixtureTokenCodec::token_for(&TokenClaims {
            subject: subject.map(str::to_owned),
            username: username.to_owned(),
        })
    }

    #[rstest]
    #[case(None)]
    #[case(Some("Basic cm9vdDpzZWtyZXQ="))]
    #[case(Some("Bearer"))]
    #[case(Some("Bearer    "))]
    #[case(Some("token-without-scheme"))]
    fn missing_or_malformed_headers_fail(#[case] header: Option<&str>) {
        let err = verifier().resolve(header).expect_err("must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
        assert_eq!(err.message(), TOKEN_MISSING_OR_INVALID);
    }

    #[test]
    fn tokens_without_a_subject_fail() {
        let header = format!("Bearer {}", fixture_token(None, "root"));
        let err = verifier()
            .resolve(Some(&header))
            .expect_err("absent subject must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[test]
    fn garbage_tokens_fail() {
        let err = verifier()
            .resolve(Some("Bearer not.a.token"))
            .expect_err("garbage token must fail");
        assert_eq!(err.code(), ErrorCode::Unauthorized);
    }

    #[rstest]
    #[case("Bearer")]
    #[case("bearer")]
    #[case("BEARER")]
    fn scheme_matching_ignores_case(#[case] scheme: &str) {
        let subject = UserId::random().to_string();
        let header = format!("{scheme} {}", fixture_token(Some(&subject), "root"));

        let identity = verifier()
            .resolve(Some(&header))
            .expect("valid token resolves");
        assert_eq!(identity.user_id().to_string(), subject);
        assert_eq!(identity.username().as_ref(), "root");
    }

    #[test]
    fn lenient_resolution_swallows_failures() {
        assert!(verifier().resolve_lenient(Some("Bearer junk")).is_none());
        assert!(verifier().resolve_lenient(None).is_none());
    }
}
