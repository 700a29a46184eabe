use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::web::Data;
use serde_json::{json, Value};
use crate::api::api::{api_parse_body, api_service_failure, api_service_token, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::game_outcome::GameOutcome;
use crate::tracker::structs::player_id::PlayerId;

/// Most finished games one batch request may carry.
pub const MAX_BATCH_OUTCOMES: usize = 1000;

#[tracing::instrument(level = "debug")]
pub async fn api_service_player_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let id = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };

    let (status_code, body) = api_service_players_return_json(player_id, &data).await;
    match status_code {
        StatusCode::OK => { HttpResponse::Ok().content_type(ContentType::json()).json(body) }
        StatusCode::NOT_FOUND => { HttpResponse::NotFound().content_type(ContentType::json()).json(body) }
        _ => { api_service_failure(&request, &data) }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_player_post(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let id = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };

    match data.game_tracker.create_player_stats(player_id).await {
        Ok(_) => { HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": format!("player added {}", id)})) }
        Err(TrackerError::AlreadyExists(_)) => { HttpResponse::Conflict().content_type(ContentType::json()).json(json!({"status": format!("player already exists {}", id)})) }
        Err(_) => { api_service_failure(&request, &data) }
    }
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_player_delete(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let id = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };

    match data.game_tracker.remove_player_stats(&player_id).await {
        Ok(_) => { HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok"})) }
        Err(TrackerError::StatsNotFound(_)) => { HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": format!("unknown player {}", id)})) }
        Err(_) => { api_service_failure(&request, &data) }
    }
}

#[tracing::instrument(skip(payload), level = "debug")]
pub async fn api_service_player_game_post(request: HttpRequest, path: web::Path<String>, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let id = path.into_inner();
    let player_id = match PlayerId::from_str(id.as_str()) {
        Ok(player_id) => player_id,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": format!("invalid identity {}", id)})),
    };

    let body = match api_parse_body(payload).await {
        Ok(data) => data,
        Err(error) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": error.to_string()})),
    };
    let outcome = match serde_json::from_slice::<GameOutcome>(&body) {
        Ok(data) => data,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad json body"})),
    };

    match data.game_tracker.record_game_outcome(&player_id, outcome).await {
        Ok(stats) => {
            HttpResponse::Ok().content_type(ContentType::json()).json(json!({
                "status": "ok",
                "identity": stats.identity,
                "total_games": stats.total_games,
                "games_won": stats.games_won,
                "games_lost": stats.games_lost,
                "wins_by_attempt": stats.wins_by_attempt,
                "updated": stats.updated
            }))
        }
        Err(error @ TrackerError::AttemptsOutOfRange(_)) => { HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": error.to_string()})) }
        Err(TrackerError::StatsNotFound(_)) => { HttpResponse::NotFound().content_type(ContentType::json()).json(json!({"status": format!("unknown player {}", id)})) }
        Err(_) => { api_service_failure(&request, &data) }
    }
}

#[tracing::instrument(skip(payload), level = "debug")]
pub async fn api_service_players_games_post(request: HttpRequest, payload: web::Payload, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }
    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let body = match api_parse_body(payload).await {
        Ok(data) => data,
        Err(error) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": error.to_string()})),
    };
    let outcomes = match serde_json::from_slice::<Vec<(String, GameOutcome)>>(&body) {
        Ok(data) => data,
        Err(_) => return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad json body"})),
    };
    if outcomes.len() > MAX_BATCH_OUTCOMES {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "too many outcomes"}));
    }

    let mut players_output = HashMap::with_capacity(outcomes.len());
    for (id, outcome) in outcomes {
        let player_id = match PlayerId::from_str(id.as_str()) {
            Ok(player_id) => player_id,
            Err(_) => {
                players_output.insert(id, json!({"status": "invalid identity"}));
                continue;
            }
        };
        match data.game_tracker.record_game_outcome(&player_id, outcome).await {
            Ok(_) => { players_output.insert(id, json!({"status": "ok"})); }
            Err(error @ TrackerError::AttemptsOutOfRange(_)) => { players_output.insert(id, json!({"status": error.to_string()})); }
            Err(TrackerError::StatsNotFound(_)) => { players_output.insert(id, json!({"status": "unknown player"})); }
            Err(_) => { players_output.insert(id, json!({"status": "internal server error"})); }
        }
    }

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "players": players_output
    }))
}

pub async fn api_service_players_return_json(id: PlayerId, data: &Data<Arc<ApiServiceData>>) -> (StatusCode, Value)
{
    match data.game_tracker.get_player_stats(&id).await {
        Ok(report) => {
            (StatusCode::OK, json!({
                "status": "ok",
                "identity": report.identity,
                "nickname": report.nickname,
                "total_games": report.total_games,
                "games_won": report.games_won,
                "games_lost": report.games_lost,
                "wins_by_attempt": report.wins_by_attempt,
                "updated": report.updated
            }))
        }
        Err(TrackerError::StatsNotFound(_)) => {
            (StatusCode::NOT_FOUND, json!({"status": format!("unknown player {}", id)}))
        }
        Err(TrackerError::NicknameNotFound(_)) => {
            (StatusCode::NOT_FOUND, json!({"status": format!("unknown nickname {}", id)}))
        }
        Err(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, json!({"status": "internal server error"}))
        }
    }
}
