// HTTP request handlers for API endpoints

use std::time::Instant;

use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::api::models::*;
use crate::error::ServiceError;
use crate::model::{DistributionChannel, Distributor, Figurine};
use crate::service::{read_source_csv, Catalog, ReferenceService, Services};
use crate::service::references::Reference;
use crate::store::Document;

type HandlerResult = Result<HttpResponse, ServiceError>;

/// Process start, for the health endpoint's uptime.
#[derive(Debug, Clone, Copy)]
pub struct StartedAt(pub Instant);

/// Health check endpoint
pub async fn health_check(started: web::Data<StartedAt>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: started.0.elapsed().as_secs(),
    }))
}

fn created<T: serde::Serialize>(location: String, body: T) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ApiResponse::success(body))
}

fn ok<T: serde::Serialize>(body: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(body))
}

// ---- figurines ----

pub async fn create_figurine(
    services: web::Data<Services>,
    payload: web::Json<Figurine>,
) -> HandlerResult {
    let created_figurine = services.figurines.create(payload.into_inner()).await?;
    let location = format!(
        "/figurines/{}",
        created_figurine.id.as_deref().unwrap_or_default()
    );
    Ok(created(location, created_figurine))
}

/// CSV body, one figurine per row.
pub async fn import_figurines(services: web::Data<Services>, body: web::Bytes) -> HandlerResult {
    let rows = read_source_csv(&body[..])?;
    tracing::info!(rows = rows.len(), "bulk import requested");
    let imported = services.figurines.import(rows).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(imported)))
}

pub async fn list_figurines(
    services: web::Data<Services>,
    query: web::Query<ListQuery>,
) -> HandlerResult {
    Ok(ok(services.figurines.list(query.exclude_restocks).await?))
}

pub async fn list_basic_figurines(
    services: web::Data<Services>,
    query: web::Query<ListQuery>,
) -> HandlerResult {
    Ok(ok(services
        .figurines
        .list_basic(query.exclude_restocks)
        .await?))
}

pub async fn get_figurine(services: web::Data<Services>, id: web::Path<String>) -> HandlerResult {
    Ok(ok(services.figurines.get(&id).await?))
}

pub async fn update_figurine(
    services: web::Data<Services>,
    id: web::Path<String>,
    payload: web::Json<Figurine>,
) -> HandlerResult {
    Ok(ok(services
        .figurines
        .update(&id, payload.into_inner())
        .await?))
}

pub async fn delete_figurine(services: web::Data<Services>, id: web::Path<String>) -> HandlerResult {
    services.figurines.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

// ---- reference catalogs ----

/// Handlers shared by the distributor and distribution-channel resources.
pub trait ReferenceRoutes: Reference {
    const PATH: &'static str;

    fn service(services: &Services) -> &ReferenceService<Self>;
}

impl ReferenceRoutes for Distributor {
    const PATH: &'static str = "/distributors";

    fn service(services: &Services) -> &ReferenceService<Self> {
        &services.distributors
    }
}

impl ReferenceRoutes for DistributionChannel {
    const PATH: &'static str = "/distribution-channels";

    fn service(services: &Services) -> &ReferenceService<Self> {
        &services.channels
    }
}

async fn create_reference<T: ReferenceRoutes>(
    services: web::Data<Services>,
    payload: web::Json<T>,
) -> HandlerResult {
    let item = T::service(&services).create(payload.into_inner()).await?;
    let location = format!("{}/{}", T::PATH, item.id().unwrap_or_default());
    Ok(created(location, item))
}

async fn list_references<T: ReferenceRoutes>(services: web::Data<Services>) -> HandlerResult {
    Ok(ok(T::service(&services).list().await?))
}

async fn get_reference<T: ReferenceRoutes>(
    services: web::Data<Services>,
    id: web::Path<String>,
) -> HandlerResult {
    Ok(ok(T::service(&services).get(&id).await?))
}

async fn update_reference<T: ReferenceRoutes>(
    services: web::Data<Services>,
    id: web::Path<String>,
    payload: web::Json<T>,
) -> HandlerResult {
    Ok(ok(T::service(&services)
        .update(&id, payload.into_inner())
        .await?))
}

async fn delete_reference<T: ReferenceRoutes>(
    services: web::Data<Services>,
    id: web::Path<String>,
) -> HandlerResult {
    T::service(&services).delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn reference_resources<T: ReferenceRoutes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(T::PATH)
            .route(web::get().to(list_references::<T>))
            .route(web::post().to(create_reference::<T>)),
    )
    .service(
        web::resource(format!("{}/{{id}}", T::PATH))
            .route(web::get().to(get_reference::<T>))
            .route(web::put().to(update_reference::<T>))
            .route(web::delete().to(delete_reference::<T>)),
    );
}

// ---- vocabularies ----

pub async fn list_catalog(catalog: web::Path<String>) -> HandlerResult {
    let catalog: Catalog = catalog.parse()?;
    Ok(ok(catalog.items()))
}

pub async fn get_catalog_item(path: web::Path<(String, String)>) -> HandlerResult {
    let (catalog, key) = path.into_inner();
    let catalog: Catalog = catalog.parse()?;
    Ok(ok(catalog.item(&key)?))
}
