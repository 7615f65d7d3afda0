//! HS256 JWT adapter for the token codec port.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::ports::{TokenClaims, TokenCodec, TokenError};

/// Wire shape of the claims.
///
/// `sub` stays optional on decode so a token without a subject surfaces as
/// claims with no subject instead of a parse failure; the identity verifier
/// is the layer that rejects it.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    username: String,
    exp: u64,
}

/// Token codec signing and verifying HS256 JWTs with a shared secret.
pub struct HsTokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl HsTokenCodec {
    /// Build a codec from the shared secret and token lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
            validation,
        }
    }

    fn expiry(&self) -> Result<u64, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|error| TokenError::issue(format!("system clock is askew: {error}")))?;
        Ok(now.saturating_add(self.ttl).as_secs())
    }
}

impl TokenCodec for HsTokenCodec {
    fn issue(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let wire = Claims {
            sub: claims.subject.clone(),
            username: claims.username.clone(),
            exp: self.expiry()?,
        };
        encode(&Header::default(), &wire, &self.encoding)
            .map_err(|error| TokenError::issue(error.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|error| TokenError::invalid(error.to_string()))?;
        Ok(TokenClaims {
            subject: data.claims.sub,
            username: data.claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";
    const HOUR: Duration = Duration::from_secs(3600);

    fn claims_for(subject: Option<&str>) -> TokenClaims {
        TokenClaims {
            subject: subject.map(str::to_owned),
            username: "mluukkai".to_owned(),
        }
    }

    #[test]
    fn issued_tokens_verify_with_the_same_secret() {
        let codec = HsTokenCodec::new(SECRET, HOUR);
        let claims = claims_for(Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"));

        let token = codec.issue(&claims).expect("issue");
        let verified = codec.verify(&token).expect("verify");
        assert_eq!(verified, claims);
    }

    #[test]
    fn tokens_without_a_subject_still_decode() {
        let codec = HsTokenCodec::new(SECRET, HOUR);
        let token = codec.issue(&claims_for(None)).expect("issue");
        let verified = codec.verify(&token).expect("verify");
        assert!(verified.subject.is_none());
    }

    #[test]
    fn tokens_fail_verification_under_a_different_secret() {
        let issuing = HsTokenCodec::new(SECRET, HOUR);
        let verifying = HsTokenCodec::new(b"another-secret-entirely-32-bytes", HOUR);

        let token = issuing.issue(&claims_for(Some("subject"))).expect("issue");
        let err = verifying.verify(&token).expect_err("wrong secret must fail");
        assert!(matches!(err, TokenError::Invalid { .. }));
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let codec = HsTokenCodec::new(SECRET, HOUR);
        let mut token = codec
            .issue(&claims_for(Some("subject")))
            .expect("issue");
        token.push('x');

        let err = codec.verify(&token).expect_err("tampered token must fail");
        assert!(matches!(err, TokenError::Invalid { .. }));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let issuing = HsTokenCodec::new(SECRET, Duration::ZERO);
        // jsonwebtoken applies a default leeway; disable it to observe expiry.
        let mut verifying = HsTokenCodec::new(SECRET, HOUR);
        verifying.validation.leeway = 0;
        verifying.validation.validate_exp = true;

        let token = issuing.issue(&claims_for(Some("subject"))).expect("issue");
        std::thread::sleep(Duration::from_secs(1));
        let err = verifying.verify(&token).expect_err("expired token must fail");
        assert!(matches!(err, TokenError::Invalid { .. }));
    }
}
