use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use crate::api::api::{api_service_token, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;

#[tracing::instrument(level = "debug")]
pub async fn api_service_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.game_tracker.get_stats())
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_prom_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(error_return) = api_validation(&request, &data).await { return error_return; }

    let params = web::Query::<QueryToken>::from_query(request.query_string()).unwrap();
    if let Some(response) = api_service_token(params.token.clone(), Arc::clone(&data.game_tracker.config)).await { return response; }

    let stats = data.game_tracker.get_stats();

    let prometheus_id = &data.game_tracker.config.tracker_config.prometheus_id;
    let mut string_output = String::with_capacity(4096);

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "gauge", "players", stats.players, true, Some(&format!("{prometheus_id} gauge metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "gauge", "nicknames", stats.nicknames, false, None));

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "games_recorded", stats.games_recorded, true, Some(&format!("{prometheus_id} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "wins_recorded", stats.wins_recorded, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "losses_recorded", stats.losses_recorded, false, None));

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp4_not_found", stats.tcp4_not_found, true, Some(&format!("{prometheus_id} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp4_failure", stats.tcp4_failure, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp4_connections_handled", stats.tcp4_connections_handled, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp4_api_handled", stats.tcp4_api_handled, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp6_not_found", stats.tcp6_not_found, true, Some(&format!("{prometheus_id} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp6_failure", stats.tcp6_failure, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp6_connections_handled", stats.tcp6_connections_handled, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "tcp6_api_handled", stats.tcp6_api_handled, false, None));

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output)
}

pub fn api_service_prom_generate_line(id: &str, type_metric: &str, metric: &str, value: i64, without_header: bool, description: Option<&str>) -> String
{
    if without_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}
