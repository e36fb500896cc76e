// ============================================================================
// HTTP TRANSPORT - One request, one JSON response
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Blob, FormData};

use crate::models::{ApiResponse, DashboardError, TorrentFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    /// multipart/form-data: text fields plus one file part named `file_field`
    Multipart {
        fields: Vec<(String, String)>,
        file_field: String,
        file: TorrentFile,
    },
}

/// Request description, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, DashboardError> {
        let value = serde_json::to_value(body)
            .map_err(|e| DashboardError::transport(format!("Serialization error: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn multipart(mut self, fields: Vec<(String, String)>, file_field: &str, file: TorrentFile) -> Self {
        self.body = RequestBody::Multipart {
            fields,
            file_field: file_field.to_string(),
            file,
        };
        self
    }

    /// Value of a query parameter
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    /// Network or JSON-decoding failures are `DashboardError::Transport`;
    /// any HTTP status is returned as a response.
    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<ApiResponse, DashboardError>;
}

/// fetch() through gloo-net
pub struct GlooTransport;

impl GlooTransport {
    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn form_data(fields: &[(String, String)], file_field: &str, file: &TorrentFile) -> Result<FormData, JsValue> {
        let form = FormData::new()?;
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let blob = Blob::new_with_u8_array_sequence(&js_sys::Array::of1(&bytes))?;
        form.append_with_blob_and_filename(file_field, &blob, &file.name)?;
        for (key, value) in fields {
            form.append_with_str(key, value)?;
        }
        Ok(form)
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, base_url: &str, request: ApiRequest) -> Result<ApiResponse, DashboardError> {
        let url = format!("{}{}", base_url, request.path);
        let builder = Self::builder(request.method, &url)
            .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart { fields, file_field, file } => {
                let form = Self::form_data(fields, file_field, file)
                    .map_err(|e| DashboardError::transport(format!("Form data error: {:?}", e)))?;
                builder.body(form)
            }
        }
        .map_err(|e| DashboardError::transport(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| DashboardError::transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| DashboardError::transport(format!("Invalid JSON response (HTTP {}): {}", status, e)))?;

        Ok(ApiResponse::new(status, body))
    }
}
