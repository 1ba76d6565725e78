use gloo_console::error;
use gloo_net::http::Request;
use shared::{Catalog, CatalogError};
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;

use crate::{Model, Msg};

/// Catalog served by the dev host at `/api/catalog`.
pub async fn fetch_catalog() -> Result<Catalog, CatalogError> {
    let resp = Request::get("/api/catalog")
        .send()
        .await
        .map_err(|e| CatalogError::Unavailable(format!("Network error: {}", e)))?;

    if !resp.ok() {
        return Err(CatalogError::Unavailable(format!(
            "Server error: {}",
            resp.status()
        )));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
    let catalog: Catalog = serde_json::from_str(&body)
        .map_err(|e| CatalogError::Invalid(format!("Failed to parse catalog: {}", e)))?;
    catalog.validate()?;
    Ok(catalog)
}

/// Replaces the embedded catalog with the served one when available.
pub fn load_catalog(link: Scope<Model>) {
    spawn_local(async move {
        match fetch_catalog().await {
            Ok(catalog) => link.send_message(Msg::CatalogLoaded(catalog)),
            Err(e) => {
                error!(format!("Using embedded catalog: {}", e));
                log::warn!("Catalog fetch failed: {}", e);
            }
        }
    });
}
