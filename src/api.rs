//! Typed routes of the launcher backend.
//!
//! Thin wrappers over [`NetClient`]; they share its lenient contract, so a
//! backend-side failure comes back as `Ok(None)`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::{NetClient, NetError};

/// One launchable entry returned by the search route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    /// `name` and `words` joined; what the backend actually matched on.
    #[serde(default)]
    pub as_search: String,
}

/// Installed plugin as listed by the plugin routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSummary {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub version: String,
}

#[derive(Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
}

#[derive(Serialize)]
struct ScanQuery<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    id: &'a str,
}

/// `GET /search/s`. Without a query the backend returns its default entries.
pub async fn search(net: &NetClient, q: Option<&str>) -> Result<Option<Vec<SearchItem>>, NetError> {
    match q {
        Some(q) => net.get_query("/search/s", &SearchQuery { q }).await,
        None => net.get("/search/s").await,
    }
}

/// `GET /plugin/list`.
pub async fn plugin_list(net: &NetClient) -> Result<Option<Vec<PluginSummary>>, NetError> {
    net.get("/plugin/list").await
}

/// `GET /plugin/{id}`.
pub async fn plugin_info(net: &NetClient, id: &str) -> Result<Option<PluginSummary>, NetError> {
    net.get_route(&["plugin", id]).await
}

/// `GET /plugin/{id}/{path}`: hands the request to the plugin itself.
///
/// `path` is split on `/`; its pieces are sent as separate segments. An empty
/// `path` has no plugin route and is answered with `Ok(None)` without a
/// request.
pub async fn plugin_invoke(
    net: &NetClient,
    id: &str,
    path: &str,
) -> Result<Option<Value>, NetError> {
    let mut segments = vec!["plugin", id];
    segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
    if segments.len() == 2 {
        tracing::debug!(id, "plugin invoke without a path");
        return Ok(None);
    }
    net.get_route(&segments).await
}

/// `POST /plugin/scan`. Without a path the backend scans its default directory.
pub async fn plugin_scan(
    net: &NetClient,
    path: Option<&str>,
) -> Result<Option<Vec<String>>, NetError> {
    match path {
        Some(path) => net.post_query("/plugin/scan", &ScanQuery { path }).await,
        None => net.post_empty("/plugin/scan").await,
    }
}

/// `POST /plugin/del`. Returns the removed plugin id, if there was one.
pub async fn plugin_delete(net: &NetClient, id: &str) -> Result<Option<String>, NetError> {
    net.post("/plugin/del", &DeleteBody { id }).await
}
