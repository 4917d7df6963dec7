// Response-parsing policy.
//
// By the time a response reaches this module the error hook has already
// turned every 4xx/5xx into an `Error`. What is left is either the
// documented success status (parsed into the declared type), some other
// non-error status, or parse-skipping mode (both returned raw).

use bytes::Bytes;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Error;
use crate::models::StatusOk;

/// Outcome of an endpoint call that did not fail.
#[derive(Debug)]
pub enum ApiResponse<T> {
    /// The documented success status, decoded into the declared type.
    Parsed(T),
    /// Raw response: parse-skipping mode, or an undocumented non-error
    /// status.
    Raw(Response),
}

impl<T> ApiResponse<T> {
    /// The parsed value, treating a raw response as an error.
    pub fn parsed(self) -> Result<T, Error> {
        match self {
            Self::Parsed(value) => Ok(value),
            Self::Raw(resp) => Err(Error::UnexpectedStatus {
                status: resp.status(),
            }),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn into_raw(self) -> Option<Response> {
        match self {
            Self::Parsed(_) => None,
            Self::Raw(resp) => Some(resp),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Parsed(value) => ApiResponse::Parsed(f(value)),
            Self::Raw(resp) => ApiResponse::Raw(resp),
        }
    }
}

/// Decode `resp` into `T` when it carries the documented success status.
pub(crate) async fn parse<T: DeserializeOwned>(
    resp: Response,
    success: StatusCode,
    skip_parsing: bool,
) -> Result<ApiResponse<T>, Error> {
    if skip_parsing || resp.status() != success {
        return Ok(ApiResponse::Raw(resp));
    }
    decode(resp).await.map(ApiResponse::Parsed)
}

/// Like [`parse`], for endpoints answering with a bare status.
///
/// A documented `204 No Content` yields [`StatusOk::ok`] without reading a
/// body; a documented `200` decodes Mattermost's `{"status":"OK"}` body.
pub(crate) async fn parse_status(
    resp: Response,
    success: StatusCode,
    skip_parsing: bool,
) -> Result<ApiResponse<StatusOk>, Error> {
    if !skip_parsing && success == StatusCode::NO_CONTENT && resp.status() == success {
        return Ok(ApiResponse::Parsed(StatusOk::ok()));
    }
    parse(resp, success, skip_parsing).await
}

/// Binary downloads: the documented success status yields the body bytes.
pub(crate) async fn parse_bytes(
    resp: Response,
    success: StatusCode,
    skip_parsing: bool,
) -> Result<ApiResponse<Bytes>, Error> {
    if skip_parsing || resp.status() != success {
        return Ok(ApiResponse::Raw(resp));
    }
    Ok(ApiResponse::Parsed(resp.bytes().await?))
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, Error> {
    let url = resp.url().clone();
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        warn!(%url, error = %e, "failed to decode response body");
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}
