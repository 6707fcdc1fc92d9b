use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ServerConfig;
use crate::net::envelope::Envelope;
use crate::net::error::NetError;

/// Every route lives under this prefix on the backend origin.
pub const API_PREFIX: &str = "/api/v1";

/// HTTP client for the launcher backend.
///
/// The plain methods (`get`, `post`, ...) keep the backend's "failure means
/// nothing to show" contract: a non-2xx status, a body that is not an
/// envelope, a body that breaks off, and a non-zero `code` all come back as
/// `Ok(None)`. Only a request that never got a response is an `Err`. The
/// `*_strict` methods return those failures as [`NetError`] values instead.
#[derive(Clone)]
pub struct NetClient {
    client: Client,
    origin: String,
    base: Url,
}

impl NetClient {
    pub fn new(server: &ServerConfig) -> Result<Self, NetError> {
        let client = Client::builder()
            .user_agent(concat!("launcher-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetError::Client)?;

        Self::with_client(client, server)
    }

    pub fn with_client(client: Client, server: &ServerConfig) -> Result<Self, NetError> {
        let origin = server.normalized_origin().to_string();
        let base = Url::parse(&format!("{}{}", origin, API_PREFIX)).map_err(|err| {
            NetError::Origin {
                origin: origin.clone(),
                reason: err.to_string(),
            }
        })?;
        if base.cannot_be_a_base() {
            return Err(NetError::Origin {
                origin,
                reason: "cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            origin,
            base,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL for a route path such as `/plugin/list`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.origin, API_PREFIX, path)
    }

    /// Absolute URL for a route given as raw path segments.
    ///
    /// Each segment is percent-encoded, so a `/`, `?` or `#` inside an id
    /// stays part of that segment.
    pub fn route(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, NetError> {
        let url = self.endpoint(path);
        let request = self.request(Method::GET, &url);
        self.call(url, request).await
    }

    /// GET with `query` encoded as a URL query string.
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<Option<T>, NetError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let request = self.request(Method::GET, &url).query(query);
        self.call(url, request).await
    }

    /// POST with `body` serialized as JSON.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Option<T>, NetError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let request = self.request(Method::POST, &url).json(body);
        self.call(url, request).await
    }

    /// POST without a body or content type.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, NetError> {
        let url = self.endpoint(path);
        let request = self.request(Method::POST, &url);
        self.call(url, request).await
    }

    /// POST with `query` in the URL and no body.
    pub async fn post_query<T, Q>(&self, path: &str, query: &Q) -> Result<Option<T>, NetError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let request = self.request(Method::POST, &url).query(query);
        self.call(url, request).await
    }

    /// GET a route built by [`route`](Self::route).
    pub async fn get_route<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<T>, NetError> {
        let url = self.route(segments);
        let request = self.request(Method::GET, &url);
        self.call(url, request).await
    }

    /// POST `body` as JSON to a route built by [`route`](Self::route).
    pub async fn post_route<T, B>(&self, segments: &[&str], body: &B) -> Result<Option<T>, NetError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.route(segments);
        let request = self.request(Method::POST, &url).json(body);
        self.call(url, request).await
    }

    pub async fn get_strict<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, NetError> {
        let url = self.endpoint(path);
        let request = self.request(Method::GET, &url);
        self.call_strict(url, request).await
    }

    pub async fn get_query_strict<T, Q>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Option<T>, NetError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let request = self.request(Method::GET, &url).query(query);
        self.call_strict(url, request).await
    }

    pub async fn post_strict<T, B>(&self, path: &str, body: &B) -> Result<Option<T>, NetError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path);
        let request = self.request(Method::POST, &url).json(body);
        self.call_strict(url, request).await
    }

    pub async fn post_empty_strict<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, NetError> {
        let url = self.endpoint(path);
        let request = self.request(Method::POST, &url);
        self.call_strict(url, request).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(%method, url, "backend request");
        self.client.request(method, url)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<Option<T>, NetError> {
        match self.call_strict(url, request).await {
            Err(err) if err.collapses_to_empty() => {
                // Backend failures render the same as "no results".
                tracing::debug!(kind = err.kind(), error = %err, "backend failure treated as empty");
                Ok(None)
            }
            other => other,
        }
    }

    async fn call_strict<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<Option<T>, NetError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(NetError::Connection { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(NetError::Transport {
                url,
                status: status.as_u16(),
            });
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(NetError::Body { url, source }),
        };

        let envelope: Envelope<T> = match serde_json::from_slice(&body) {
            Ok(envelope) => envelope,
            Err(source) => return Err(NetError::Malformed { url, source }),
        };

        envelope.into_data()
    }
}
