//! Bearer credential extraction for HTTP handlers.
//!
//! The extractor only captures the raw `Authorization` header; deciding what
//! the credential means is the identity verifier's job, so handlers consume
//! the verifier's output and never parse headers themselves.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// The raw `Authorization` header of the current request, when present.
///
/// Extraction itself is infallible; a missing or unreadable header simply
/// yields an empty credential.
#[derive(Debug, Clone, Default)]
pub struct BearerAuth(Option<String>);

impl BearerAuth {
    /// Raw header value as received, if any.
    pub fn header(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for BearerAuth {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        ready(Ok(Self(header)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_web::test]
    async fn captures_the_authorization_header_verbatim() {
        let app = test::init_service(App::new().route(
            "/",
            web::get().to(|auth: BearerAuth| async move {
                HttpResponse::Ok().body(auth.header().unwrap_or("absent").to_owned())
            }),
        ))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/")
                .insert_header(("Authorization", "Bearer abc.def.ghi"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"Bearer abc.def.ghi");
    }

    #[actix_web::test]
    async fn missing_headers_extract_as_empty() {
        let app = test::init_service(App::new().route(
            "/",
            web::get().to(|auth: BearerAuth| async move {
                HttpResponse::Ok().body(auth.header().unwrap_or("absent").to_owned())
            }),
        ))
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"absent");
    }
}
