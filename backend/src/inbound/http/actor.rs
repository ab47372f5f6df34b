//! Acting-user extraction.
//!
//! Requests identify their caller through the `X-User-ID` header. There is no
//! authentication; the header is taken at face value.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload};

use crate::domain::{Error, UserId};

/// Header naming the user a request acts on behalf of.
pub const USER_ID_HEADER: &str = "X-User-ID";

/// The user a request acts on behalf of.
///
/// Extraction fails with `invalid_param` when the header is missing, blank
/// or not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(UserId);

impl Actor {
    /// Identifier of the acting user.
    pub fn id(&self) -> &UserId {
        &self.0
    }

    /// Consume the extractor, yielding the acting user's identifier.
    pub fn into_inner(self) -> UserId {
        self.0
    }

    fn from_headers(req: &HttpRequest) -> Result<Self, Error> {
        let missing = || Error::invalid_param(format!("{USER_ID_HEADER} header is required"));
        let raw = req
            .headers()
            .get(USER_ID_HEADER)
            .ok_or_else(missing)?
            .to_str()
            .map_err(|_| Error::invalid_param(format!("{USER_ID_HEADER} header must be text")))?
            .trim();
        if raw.is_empty() {
            return Err(missing());
        }
        UserId::new(raw)
            .map(Self)
            .map_err(|err| Error::invalid_param(err.to_string()))
    }
}

impl FromRequest for Actor {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req))
    }
}
