use crate::api::{redirect_to, ApiError, FormError, PageQuery};
use crate::consts;
use crate::multipart::read_form;
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use application::command::audiotrack::{AudiotrackFields, AudiotrackService};
use application::error::AppError;
use application::query::dto::AudiotrackView;
use application::query::get_audiotrack::GetAudiotrack;
use application::query::get_audiotrack_page::GetAudiotrackPage;
use infra::repository::postgres::command::AudiotrackRepositoryImpl;
use infra::repository::postgres::query::AudiotrackDaoImpl;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AudiotrackRequest {
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: i32,
    pub genre: Option<String>,
    pub play_count: Option<i32>,
    pub release_year: Option<i32>,
    pub photo: Option<String>,
}

impl From<AudiotrackRequest> for AudiotrackFields {
    fn from(req: AudiotrackRequest) -> Self {
        Self {
            title: req.title,
            artist: req.artist,
            album: req.album,
            duration: req.duration,
            genre: req.genre,
            play_count: req.play_count,
            release_year: req.release_year,
            photo: req.photo,
        }
    }
}

#[derive(Debug, Serialize)]
struct AudiotrackPageResponse {
    audiotracks: Vec<AudiotrackView>,
    #[serde(rename = "currentPage")]
    current_page: u64,
    #[serde(rename = "totalPages")]
    total_pages: u64,
    #[serde(rename = "totalItems")]
    total_items: u64,
}

fn service(state: &AppState) -> AudiotrackService {
    AudiotrackService::new(
        Arc::new(AudiotrackRepositoryImpl::new(state.db.clone())),
        state.photos.clone(),
    )
}

async fn list(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let dao = Arc::new(AudiotrackDaoImpl::new(state.db.clone()));
    let page = GetAudiotrackPage::new(dao)
        .handle(query.page.unwrap_or(1))
        .await
        .map_err(AppError::from)?;
    Ok(HttpResponse::Ok().json(AudiotrackPageResponse {
        audiotracks: page.items,
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_items: page.total_items,
    }))
}

async fn view(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let dao = Arc::new(AudiotrackDaoImpl::new(state.db.clone()));
    let track = GetAudiotrack::new(dao)
        .handle(id)
        .await
        .map_err(AppError::from)?
        .ok_or(AppError::NotFound("audiotrack".to_string(), id))?;
    Ok(HttpResponse::Ok().json(track))
}

async fn create(
    state: web::Data<AppState>,
    body: web::Json<AudiotrackRequest>,
) -> Result<HttpResponse, ApiError> {
    let track = service(&state).create(body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(AudiotrackView::from(track)))
}

async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<AudiotrackRequest>,
) -> Result<HttpResponse, ApiError> {
    let track = service(&state)
        .update(path.into_inner(), body.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(AudiotrackView::from(track)))
}

async fn add(state: web::Data<AppState>, payload: Multipart) -> Result<HttpResponse, FormError> {
    let (fields, upload) = read_form(payload).await?;
    service(&state).create_with_photo(&fields, upload).await?;
    Ok(redirect_to(consts::AUDIOTRACKS_INDEX_PAGE))
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
    Ok(redirect_to(consts::AUDIOTRACKS_INDEX_PAGE))
}

async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service(&state).delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "message": "Audiotrack deleted" })))
}

async fn listing_page() -> HttpResponse {
    redirect_to(consts::AUDIOTRACKS_INDEX_PAGE)
}

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    cfg.route("/list-audiotracks", web::get().to(listing_page))
        .service(
            web::resource("/api/audiotracks")
                .route(web::get().to(list))
                .route(web::post().to(create)),
        )
        .route("/api/view-audiotrack/{id}", web::get().to(view))
        .route("/api/audiotracks/{id}", web::put().to(update))
        .route("/add-audiotrack", web::post().to(add))
        .route("/edit-audiotrack/{id}", web::post().to(edit))
        .route("/delete-audiotrack/{id}", web::delete().to(delete));
}
