//! `POST /api/validate_chirp` request/response bodies.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{ChirpyError, Result};

/// Inbound chirp.
///
/// Decoding rules:
/// - the `body` key matches case-insensitively; the last matching key wins
/// - `"body": null`, a missing `body` and a top-level `null` all yield `""`
/// - other keys are ignored
/// - only the first JSON value is read; anything after it is left unread
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ValidateChirpRequest {
    /// Raw chirp text.
    pub body: String,
}

impl ValidateChirpRequest {
    /// Decode the first JSON value of a raw request body.
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let mut values = serde_json::Deserializer::from_slice(raw).into_iter::<Self>();
        match values.next() {
            Some(decoded) => decoded.map_err(|e| ChirpyError::MalformedBody(e.to_string())),
            None => Err(ChirpyError::MalformedBody("empty body".into())),
        }
    }
}

impl<'de> Deserialize<'de> for ValidateChirpRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_option(RequestVisitor)
    }
}

struct RequestVisitor;

impl<'de> Visitor<'de> for RequestVisitor {
    type Value = ValidateChirpRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with a string `body` field")
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(ValidateChirpRequest::default())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(ValidateChirpRequest::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Self::Value, D::Error> {
        d.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut req = ValidateChirpRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("body") {
                // null leaves the previous value in place
                if let Some(body) = map.next_value::<Option<String>>()? {
                    req.body = body;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(req)
    }
}

/// Successful validation result.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CleanedChirp {
    pub cleaned_body: String,
}

/// Error body shared by every JSON endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&ChirpyError> for ErrorBody {
    fn from(err: &ChirpyError) -> Self {
        Self {
            error: err.client_message().to_string(),
        }
    }
}
