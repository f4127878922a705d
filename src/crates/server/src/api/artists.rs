use crate::api::{redirect_to, ApiError, FormError, PageQuery};
use crate::consts;
use crate::multipart::read_form;
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use application::command::artist::{ArtistFields, ArtistService};
use application::error::AppError;
use application::query::dto::ArtistView;
use application::query::get_artist::GetArtist;
use application::query::get_artist_page::GetArtistPage;
use infra::repository::postgres::command::ArtistRepositoryImpl;
use infra::repository::postgres::query::ArtistDaoImpl;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ArtistRequest {
    pub name: String,
    pub bio: Option<String>,
    pub country: Option<String>,
    pub genre: Option<String>,
    pub formed_year: Option<i32>,
    pub is_active: Option<bool>,
    pub label: Option<String>,
    pub photo: Option<String>,
}

impl From<ArtistRequest> for ArtistFields {
    fn from(req: ArtistRequest) -> Self {
        Self {
            name: req.name,
            bio: req.bio,
            country: req.country,
            genre: req.genre,
            formed_year: req.formed_year,
            is_active: req.is_active,
            label: req.label,
            photo: req.photo,
        }
    }
}

#[derive(Debug, Serialize)]
struct ArtistPageResponse {
    artists: Vec<ArtistView>,
    #[serde(rename = "currentPage")]
    current_page: u64,
    #[serde(rename = "totalPages")]
    total_pages: u64,
    #[serde(rename = "totalItems")]
    total_items: u64,
}

fn service(state: &AppState) -> ArtistService {
    ArtistService::new(
        Arc::new(ArtistRepositoryImpl::new(state.db.clone())),
        state.photos.clone(),
    )
}

async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let dao = Arc::new(ArtistDaoImpl::new(state.db.clone()));
    let page = GetArtistPage::new(dao)
        .handle(query.page.unwrap_or(1))
        .await
        .map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(ArtistPageResponse {
        artists: page.items,
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_items: page.total_items,
    }))
}

async fn view(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let dao = Arc::new(ArtistDaoImpl::new(state.db.clone()));
    let artist = GetArtist::new(dao)
        .handle(id)
        .await
        .map_err(AppError::from)?
        .ok_or(AppError::NotFound("artist".to_string(), id))?;
    Ok(HttpResponse::Ok().json(artist))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<ArtistRequest>,
) -> Result<HttpResponse, ApiError> {
    let artist = service(&state).create(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(ArtistView::from(artist)))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<ArtistRequest>,
) -> Result<HttpResponse, ApiError> {
    let artist = service(&state)
        .update(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(ArtistView::from(artist)))
}

async fn add(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse, FormError> {
    let (fields, upload) = read_form(payload).await?;
    service(&state).create_with_photo(&fields, upload).await?;
    Ok(redirect_to(consts::ARTISTS_INDEX_PAGE))
}

async fn edit(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    payload: Multipart,
) -> Result<HttpResponse, FormError> {
    let (fields, upload) = read_form(payload).await?;
    service(&state)
        .edit_with_photo(path.into_inner(), &fields, upload)
        .await?;
    Ok(redirect_to(consts::ARTISTS_INDEX_PAGE))
}

async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service(&state).delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Artist deleted" })))
}

async fn listing_page() -> HttpResponse {
    redirect_to(consts::ARTISTS_INDEX_PAGE)
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route("/list-artists", web::get().to(listing_page))
        .service(
            web::resource("/api/artists")
                .route(web::get().to(list))
                .route(web::post().to(create)),
        )
        .route("/api/view-artist/{id}", web::get().to(view))
        .route("/api/artists/{id}", web::put().to(update))
        .route("/add-artist", web::post().to(add))
        .route("/edit-artist/{id}", web::post().to(edit))
        .route("/delete-artist/{id}", web::delete().to(delete));
}
