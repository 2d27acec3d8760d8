//! HTTP transport
//!
//! One authenticated, blocking request per call. Responses with a status of
//! 400 or above become [`ApiError::Remote`]; nothing is retried.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use log::debug;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::Data;
use crate::config::Config;

const APPLICATION_JSON: &str = "application/json";

const OCTET_STREAM: &str = "application/octet-stream";

/// Asana API client
///
/// Holds the bearer token and workspace taken from [`Config`] at construction.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    token: String,
    workspace: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("workspace", &self.workspace)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client from loaded configuration
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .user_agent(concat!("asana-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| ApiError::Http {
                context: "creating HTTP client",
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            workspace: config.workspace.clone(),
        })
    }

    /// Workspace GID this client is scoped to
    #[must_use]
    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Build the absolute URL for an API path plus query parameters
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    /// Perform one authenticated request and return the raw response body.
    ///
    /// `Content-Type: application/json` is only sent along with a body.
    pub fn request<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        debug!("{method} {url}");

        let mut builder = self.authorized(self.http.request(method, url));
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(ApiError::Encode)?;
            builder = builder.header(CONTENT_TYPE, APPLICATION_JSON).body(payload);
        }

        let response = builder.send().map_err(|source| ApiError::Http {
            context: "executing request",
            source,
        })?;
        read_response(response)
    }

    /// GET a resource and decode its `data`
    pub fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let body = self.request::<()>(Method::GET, path, query, None)?;
        decode(&body)
    }

    /// Send a payload wrapped in `data` and decode the echoed record
    pub fn send<B, T>(&self, method: Method, path: &str, payload: B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = self.request(method, path, &[], Some(&Data { data: payload }))?;
        decode(&body)
    }

    /// DELETE a resource, discarding the (empty) response
    pub fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<()>(Method::DELETE, path, &[], None)?;
        Ok(())
    }

    /// Upload a local file as the `file` field of a multipart POST.
    ///
    /// The file is streamed in a single request under its base name. Status
    /// and error handling match [`Client::request`].
    pub fn upload_multipart(&self, path: &str, file_path: &Path) -> Result<Vec<u8>, ApiError> {
        let file = File::open(file_path).map_err(|source| ApiError::Io {
            context: format!("opening file {}", file_path.display()),
            source,
        })?;
        let length = file
            .metadata()
            .map_err(|source| ApiError::Io {
                context: format!("reading metadata of {}", file_path.display()),
                source,
            })?
            .len();
        let file_name = file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let part = Part::reader_with_length(file, length)
            .file_name(file_name.clone())
            .mime_str(OCTET_STREAM)
            .map_err(|source| ApiError::Http {
                context: "creating form file",
                source,
            })?;
        let form = Form::new().part("file", part);

        let url = self.url(path, &[])?;
        debug!("POST {url} (uploading {file_name}, {length} bytes)");

        let response = self
            .authorized(self.http.post(url))
            .multipart(form)
            .send()
            .map_err(|source| ApiError::Http {
                context: "executing request",
                source,
            })?;
        read_response(response)
    }

    /// Download a pre-signed URL to `destination`, creating or truncating it.
    ///
    /// Pre-signed URLs carry their own credentials, so no bearer token is
    /// attached. Returns the number of bytes written.
    pub fn download(&self, url: &str, destination: &Path) -> Result<u64, ApiError> {
        if url.is_empty() {
            return Err(ApiError::MissingDownloadUrl);
        }

        debug!("downloading to {}", destination.display());
        let mut response = self.http.get(url).send().map_err(|source| ApiError::Http {
            context: "downloading file",
            source,
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(ApiError::DownloadStatus(status));
        }

        let mut out = File::create(destination).map_err(|source| ApiError::Io {
            context: format!("creating file {}", destination.display()),
            source,
        })?;
        let written = io::copy(&mut response, &mut out).map_err(|source| ApiError::Io {
            context: format!("writing file {}", destination.display()),
            source,
        })?;

        debug!("wrote {written} bytes");
        Ok(written)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.token).header(ACCEPT, APPLICATION_JSON)
    }
}

fn read_response(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status().as_u16();
    let body = response.bytes().map_err(|source| ApiError::Http {
        context: "reading response",
        source,
    })?;
    debug!("status {status}, {} bytes", body.len());

    if status >= 400 {
        return Err(ApiError::from_response(status, &body));
    }
    Ok(body.to_vec())
}

/// Decode a `{"data": ...}` response body
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let wrapped: Data<T> = serde_json::from_slice(body)?;
    Ok(wrapped.data)
}
