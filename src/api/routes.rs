// API route configuration

use crate::api::handlers;
use crate::model::{DistributionChannel, Distributor};
use actix_web::web;

/// Vocabulary segments served by the catalog handlers.
const CATALOGS: &str = "{catalog:lineups|series|categories|anniversaries}";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        // Figurines; literal segments before `{id}`
        .service(
            web::resource("/figurines")
                .route(web::get().to(handlers::list_figurines))
                .route(web::post().to(handlers::create_figurine)),
        )
        .route(
            "/figurines/import",
            web::post().to(handlers::import_figurines),
        )
        .route(
            "/figurines/basic",
            web::get().to(handlers::list_basic_figurines),
        )
        .service(
            web::resource("/figurines/{id}")
                .route(web::get().to(handlers::get_figurine))
                .route(web::put().to(handlers::update_figurine))
                .route(web::delete().to(handlers::delete_figurine)),
        )
        // Reference catalogs
        .configure(handlers::reference_resources::<Distributor>)
        .configure(handlers::reference_resources::<DistributionChannel>)
        // Closed vocabularies
        .route(
            &format!("/{CATALOGS}"),
            web::get().to(handlers::list_catalog),
        )
        .route(
            &format!("/{CATALOGS}/{{key}}"),
            web::get().to(handlers::get_catalog_item),
        );
}
