// Request construction: path templating, query filtering, and body encoding.
//
// Every endpoint method builds a `Request` and hands it to the client; this
// module is the only place that turns one into a `reqwest::RequestBuilder`.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::Transport;

// ── Paths ────────────────────────────────────────────────────────────

/// Render `template` against `base`, substituting `{name}` placeholders.
///
/// Each template segment becomes one URL path segment, so substituted
/// values are percent-encoded as path segments (a `/` inside a value never
/// splits it) and no `//` can appear at the join.
pub fn endpoint_url(base: &Url, template: &str, vars: &[(&str, &str)]) -> Result<Url, Error> {
    let mut url = base.clone();
    {
        let mut segments = url.path_segments_mut().map_err(|()| Error::PathVariable {
            template: template.into(),
            reason: format!("base URL {base} cannot carry path segments"),
        })?;
        segments.pop_if_empty();
        for raw in template.split('/').filter(|s| !s.is_empty()) {
            segments.push(&render_segment(template, raw, vars)?);
        }
    }
    Ok(url)
}

fn render_segment(template: &str, segment: &str, vars: &[(&str, &str)]) -> Result<String, Error> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}').map(|i| open + i) else {
            return Err(Error::PathVariable {
                template: template.into(),
                reason: format!("unterminated placeholder in segment {segment:?}"),
            });
        };
        let name = &rest[open + 1..close];
        let value = vars
            .iter()
            .find_map(|(k, v)| (*k == name).then_some(*v))
            .ok_or_else(|| Error::PathVariable {
                template: template.into(),
                reason: format!("no value for {{{name}}}"),
            })?;
        out.push_str(&rest[..open]);
        out.push_str(value);
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

// ── Query ────────────────────────────────────────────────────────────

/// Textual form of a query parameter value.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(impl QueryValue for $ty {
            fn to_query_value(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_query_value!(bool, i32, i64, u32, u64, usize, str, String);

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Query parameters with absent values already dropped.
///
/// There is deliberately no way to send an explicit null: `None` means
/// "leave the parameter out", while `Some(false)` / `Some(0)` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param<V: QueryValue>(mut self, name: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((name, value.to_query_value()));
        }
        self
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// ── Bodies ───────────────────────────────────────────────────────────

/// A model that can be sent as `multipart/form-data`.
pub trait MultipartModel {
    /// Plain form fields, in order.
    fn form_fields(&self) -> Vec<(String, String)>;

    /// File parts, in order.
    fn file_parts(&self) -> Vec<FilePart>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name (e.g. `files`).
    pub field: String,
    pub file_name: String,
    pub content: Bytes,
    pub mime_type: Option<String>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    fn into_part(self) -> Result<Part, Error> {
        let length = u64::try_from(self.content.len()).unwrap_or(u64::MAX);
        let part = Part::stream_with_length(reqwest::Body::from(self.content), length)
            .file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|e| Error::Multipart(format!("invalid MIME type {mime:?}: {e}"))),
            None => Ok(part),
        }
    }
}

/// A lone file is a form with one part and no fields.
impl MultipartModel for FilePart {
    fn form_fields(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn file_parts(&self) -> Vec<FilePart> {
        vec![self.clone()]
    }
}

/// Snapshot of a [`MultipartModel`]'s two views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartBody {
    pub fn from_model<M: MultipartModel + ?Sized>(model: &M) -> Self {
        Self {
            fields: model.form_fields(),
            files: model.file_parts(),
        }
    }

    fn into_form(self) -> Result<Form, Error> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let field = file.field.clone();
            form = form.part(field, file.into_part()?);
        }
        Ok(form)
    }
}

/// Request body forms.
///
/// Structured models and opaque payloads are separate arms so each keeps
/// its own serializer: a model serializes through its `Serialize` impl
/// (which omits unset fields), an opaque payload is sent exactly as given.
#[derive(Debug, Clone, Default)]
pub enum Body {
    #[default]
    Empty,
    /// JSON of a typed model.
    Model(Value),
    /// JSON of a raw sequence or mapping (e.g. a list of ids).
    Raw(Value),
    Multipart(MultipartBody),
}

impl Body {
    pub fn model<T: Serialize + ?Sized>(model: &T) -> Result<Self, Error> {
        Ok(Self::Model(serde_json::to_value(model)?))
    }

    pub fn raw(value: impl Into<Value>) -> Self {
        Self::Raw(value.into())
    }

    pub fn multipart<M: MultipartModel + ?Sized>(model: &M) -> Self {
        Self::Multipart(MultipartBody::from_model(model))
    }
}

// ── Request descriptor ───────────────────────────────────────────────

/// One endpoint call: verb, path template, variables, query, body, and the
/// documented success status.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: &'static str,
    pub path_vars: Vec<(&'static str, String)>,
    pub query: Query,
    pub body: Body,
    pub success: StatusCode,
}

impl Request {
    pub fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            path,
            path_vars: Vec::new(),
            query: Query::new(),
            body: Body::Empty,
            success: StatusCode::OK,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &'static str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: &'static str) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Bind a path variable.
    pub fn var(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_vars.push((name, value.into()));
        self
    }

    /// Add a query parameter; `None` leaves it out.
    pub fn param<V: QueryValue>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.query = self.query.param(name, value);
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// JSON body from a typed model.
    pub fn json<T: Serialize + ?Sized>(self, model: &T) -> Result<Self, Error> {
        Ok(self.body(Body::model(model)?))
    }

    /// Documented success status (defaults to 200).
    pub fn expect(mut self, status: StatusCode) -> Self {
        self.success = status;
        self
    }

    /// Absolute URL of this request (without query) under `base`.
    pub fn url(&self, base: &Url) -> Result<Url, Error> {
        let vars: Vec<(&str, &str)> = self
            .path_vars
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        endpoint_url(base, self.path, &vars)
    }

    pub(crate) fn into_builder(self, transport: &Transport) -> Result<RequestBuilder, Error> {
        let url = self.url(transport.base_url())?;
        debug!("{} {url}", self.method);
        let mut builder = transport.request(self.method, url);

        if !self.query.is_empty() {
            builder = builder.query(self.query.pairs());
        }

        builder = match self.body {
            Body::Empty => builder,
            Body::Model(value) | Body::Raw(value) => builder.json(&value),
            Body::Multipart(multipart) => builder.multipart(multipart.into_form()?),
        };

        Ok(builder)
    }
}
