//! Query-string extraction for filter criteria.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use serde_json::json;
use std::future::{Ready, ready};

use crate::domain::{Error, ProductQuery, QueryValidationError};

/// Extractor wrapping the parsed [`ProductQuery`].
///
/// `actix_web::web::Query` cannot collect repeated keys, so the raw query
/// string is decoded pair by pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery(pub ProductQuery);

impl FilterQuery {
    /// Parse a raw (still percent-encoded) query string.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        ProductQuery::from_pairs(url::form_urlencoded::parse(raw.as_bytes()))
            .map(Self)
            .map_err(map_query_validation_error)
    }

    /// Parsed criteria.
    pub fn into_inner(self) -> ProductQuery {
        self.0
    }
}

fn map_query_validation_error(err: QueryValidationError) -> Error {
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": err.field(), "code": err.code() }))
}

impl FromRequest for FilterQuery {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::parse(req.query_string()))
    }
}
