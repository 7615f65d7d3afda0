//! Port for credential token signing and verification.
//!
//! The cryptography is an external primitive consumed through this boundary;
//! the domain only sees the claims.

use super::define_adapter_error;

/// Claims carried inside a signed credential token.
///
/// `subject` holds the caller's store identifier. It is optional on the wire:
/// a token that decodes but names no subject is rejected downstream by the
/// identity verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: Option<String>,
    pub username: String,
}

define_adapter_error! {
    /// Failures raised by token codec adapters.
    pub enum TokenError {
        /// The token is missing pieces, tampered with, or expired.
        Invalid => "token rejected: {message}",
        /// A fresh token could not be produced.
        Issue => "token could not be issued: {message}",
    }
}

/// Port for issuing and verifying signed credential tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    /// Sign a fresh token embedding the given claims.
    fn issue(&self, claims: &TokenClaims) -> Result<String, TokenError>;

    /// Verify a token and recover its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}

/// Deterministic, crypto-free codec for unit tests.
///
/// Tokens are `subject|username` with an empty subject segment standing for
/// an absent subject claim.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTokenCodec;

impl FixtureTokenCodec {
    /// Render the fixture token for the given claims.
    pub fn token_for(claims: &TokenClaims) -> String {
        let subject = claims.subject.as_deref().unwrap_or_default();
        format!("{subject}|{}", claims.username)
    }
}

impl TokenCodec for FixtureTokenCodec {
    fn issue(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        Ok(Self::token_for(claims))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let Some((subject, username)) = token.split_once('|') else {
            return Err(TokenError::invalid("not a fixture token"));
        };
        if username.is_empty() {
            return Err(TokenError::invalid("fixture token without username"));
        }
        Ok(TokenClaims {
            subject: (!subject.is_empty()).then(|| subject.to_owned()),
            username: username.to_owned(),
        })
    }
}
