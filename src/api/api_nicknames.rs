use std::str::FromStr;
use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_service_failure, api_service_token, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::player_id::PlayerId;

/// Longest accepted nickname, in bytes.
pub const MAX_NICKNAME_BYTES: usize = 255;

#[tracing::instrument(level = "debug")]
pub async fn api_service_nickname_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let id = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };

    match data.game_tracker.get_player_nickname(&player_id).await {
        Ok(nickname) => { HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok", "identity": player_id, "nickname": nickname})) }
        Err(TrackerError::NicknameNotFound(_)) => { HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": format!("unknown nickname {}", id)})) }
        Err(_) => { api_service_failure(&request, &data) }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_nickname_post(request: HttpRequest, path: web::Path<(String, String)>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let (id, nickname) = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };
    if nickname.is_empty() || nickname.len() > MAX_NICKNAME_BYTES {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad nickname"}));
    }

    match data.game_tracker.set_player_nickname(&player_id, nickname.as_str()).await {
        Ok(true) => { HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": format!("nickname added {}", id)})) }
        Ok(false) => { HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": format!("nickname updated {}", id)})) }
        Err(_) => { api_service_failure(&request, &data) }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_nickname_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let id = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };

    match data.game_tracker.remove_player_nickname(&player_id).await {
        Ok(_) => { HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok"})) }
        Err(TrackerError::NicknameNotFound(_)) => { HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": format!("unknown nickname {}", id)})) }
        Err(_) => { api_service_failure(&request, &data) }
    }
}
