//! Attaching access/refresh token cookies to outgoing responses.
//!
//! Every call appends its own `Set-Cookie` header, so the access and refresh
//! cookies can be attached to the same response without one replacing the
//! other, and cookies set elsewhere are left alone.

use actix_web::{
    http::header::{HeaderValue, SET_COOKIE},
    HttpResponse, HttpResponseBuilder,
};
use swo_core::{domain::entities::token::TokenCookie, services::token::TokenService};

/// Chainable cookie setters for actix responses
pub trait TokenCookieExt {
    /// Appends the `access_token` cookie with the access cookie max-age
    fn attach_access_token_cookie(&mut self, tokens: &TokenService, token: &str) -> &mut Self;

    /// Appends the `refresh_token` cookie with the refresh cookie max-age
    fn attach_refresh_token_cookie(&mut self, tokens: &TokenService, token: &str) -> &mut Self;
}

impl TokenCookieExt for HttpResponseBuilder {
    fn attach_access_token_cookie(&mut self, tokens: &TokenService, token: &str) -> &mut Self {
        let cookie = tokens.access_token_cookie(token);
        append_to_builder(self, &cookie)
    }

    fn attach_refresh_token_cookie(&mut self, tokens: &TokenService, token: &str) -> &mut Self {
        let cookie = tokens.refresh_token_cookie(token);
        append_to_builder(self, &cookie)
    }
}

impl<B> TokenCookieExt for HttpResponse<B> {
    fn attach_access_token_cookie(&mut self, tokens: &TokenService, token: &str) -> &mut Self {
        let cookie = tokens.access_token_cookie(token);
        append_to_response(self, &cookie)
    }

    fn attach_refresh_token_cookie(&mut self, tokens: &TokenService, token: &str) -> &mut Self {
        let cookie = tokens.refresh_token_cookie(token);
        append_to_response(self, &cookie)
    }
}

// An invalid header value is recorded by the builder and surfaces as a 500.
fn append_to_builder<'a>(
    builder: &'a mut HttpResponseBuilder,
    cookie: &TokenCookie,
) -> &'a mut HttpResponseBuilder {
    builder.append_header((SET_COOKIE, cookie.to_string()))
}

fn append_to_response<'a, B>(
    response: &'a mut HttpResponse<B>,
    cookie: &TokenCookie,
) -> &'a mut HttpResponse<B> {
    match HeaderValue::try_from(cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => {
            log::error!("Cannot encode {} cookie header: {}", cookie.name(), e);
        }
    }
    response
}
