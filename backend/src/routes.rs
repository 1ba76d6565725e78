use actix_files::Files;
use actix_web::{HttpResponse, web};
use serde_json::json;
use std::path::PathBuf;

use crate::catalog_store::{FileCatalog, load_or_embedded};
use crate::error::ServerError;

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/catalog").route(web::get().to(get_catalog)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: PathBuf) {
    configure_api(cfg);
    // Registered last so /api/* keeps precedence.
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Re-reads the catalog file on every request, off the async workers.
async fn get_catalog(store: web::Data<FileCatalog>) -> Result<HttpResponse, ServerError> {
    let reader = store.clone();
    let catalog = web::block(move || load_or_embedded(reader.get_ref())).await??;
    log::debug!("Serving catalog from {}", store.path().display());
    Ok(HttpResponse::Ok().json(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use shared::{Catalog, CatalogRepository, EmbeddedCatalog};

    fn store(path: &str) -> web::Data<FileCatalog> {
        web::Data::new(FileCatalog::new(path))
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test::init_service(App::new().configure(configure_api)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn catalog_is_served_as_json() {
        let app = test::init_service(
            App::new()
                .app_data(store(concat!(env!("CARGO_MANIFEST_DIR"), "/../config/catalog.yaml")))
                .configure(configure_api),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/catalog").to_request();
        let catalog: Catalog = test::call_and_read_body_json(&app, req).await;

        assert_eq!(catalog, EmbeddedCatalog.load().unwrap());
        assert!(catalog.validate().is_ok());
    }

    #[actix_web::test]
    async fn unreadable_catalog_file_still_serves_embedded_copy() {
        let app = test::init_service(
            App::new()
                .app_data(store("/nonexistent/catalog.yaml"))
                .configure(configure_api),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/catalog").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn catalog_file_edits_are_picked_up_between_requests() {
        let path = std::env::temp_dir().join(format!("ecosnap-catalog-{}.yaml", std::process::id()));
        let mut edited = EmbeddedCatalog.load().unwrap();
        std::fs::write(&path, EmbeddedCatalog::source()).unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(FileCatalog::new(path.clone())))
                .configure(configure_api),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/catalog").to_request();
        let first: Catalog = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first.user.points, 1250);

        edited.user.points = 4321;
        std::fs::write(&path, serde_json::to_string(&edited).unwrap()).unwrap();
        let req = test::TestRequest::get().uri("/api/catalog").to_request();
        let second: Catalog = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second.user.points, 4321);

        std::fs::remove_file(&path).ok();
    }

    #[actix_web::test]
    async fn catalog_rejects_post() {
        let app = test::init_service(
            App::new()
                .app_data(store("/nonexistent/catalog.yaml"))
                .configure(configure_api),
        )
        .await;
        let req = test::TestRequest::post().uri("/api/catalog").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[::core::prelude::v1::test]
    fn catalog_error_maps_to_service_unavailable() {
        use actix_web::ResponseError;
        let err = ServerError::from(shared::CatalogError::Invalid("no profiles".into()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
