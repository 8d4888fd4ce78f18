//! Request extractors

use super::middleware::principal_for;
use crate::auth::roles::Principal;
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload};
use futures::future::{Ready, ready};
use std::ops::Deref;

/// The principal making the request
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl Deref for CurrentPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CurrentPrincipal {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(CurrentPrincipal(principal_for(req))))
    }
}
