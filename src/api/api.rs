use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::process::exit;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use futures_util::StreamExt;
use log::{error, info};
use serde_json::json;
use crate::api::api_nicknames::{api_service_nickname_delete, api_service_nickname_get, api_service_nickname_post};
use crate::api::api_players::{api_service_player_delete, api_service_player_game_post, api_service_player_get, api_service_player_post, api_service_players_games_post};
use crate::api::api_stats::{api_service_prom_get, api_service_stats_get};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::game_tracker::GameTracker;

/// Largest request body any endpoint accepts, in bytes.
pub const MAX_BODY_BYTES: usize = 1_048_576;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));

        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("api/metrics").route(web::get().to(api_service_prom_get)));

        cfg.service(web::resource("api/player/{id}")
            .route(web::get().to(api_service_player_get))
            .route(web::post().to(api_service_player_post))
            .route(web::delete().to(api_service_player_delete)));
        cfg.service(web::resource("api/player/{id}/game").route(web::post().to(api_service_player_game_post)));
        cfg.service(web::resource("api/players/games").route(web::post().to(api_service_players_games_post)));

        cfg.service(web::resource("api/nickname/{id}")
            .route(web::get().to(api_service_nickname_get))
            .route(web::delete().to(api_service_nickname_delete)));
        cfg.service(web::resource("api/nickname/{id}/{nickname}").route(web::post().to(api_service_nickname_post)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<GameTracker>,
    api_server_config: ApiServerConfig
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    let api_service_data = Arc::new(ApiServiceData {
        game_tracker: data.clone(),
        api_server_config: Arc::new(api_server_config.clone()),
    });

    if api_server_config.ssl {
        info!("[API] Starting server listener with SSL on {}", addr);
        if api_server_config.ssl_key.is_empty() || api_server_config.ssl_cert.is_empty() {
            error!("[API] No SSL key or SSL certificate given, exiting...");
            exit(1);
        }

        let certs_file = &mut BufReader::new(File::open(api_server_config.ssl_cert.clone()).unwrap());
        let key_file = &mut BufReader::new(File::open(api_server_config.ssl_key.clone()).unwrap());

        let tls_certs = rustls_pemfile::certs(certs_file)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        let tls_key = rustls_pemfile::pkcs8_private_keys(key_file)
            .next()
            .unwrap()
            .unwrap();

        let tls_config = rustls::ServerConfig::builder()
            .with_no_client_auth()
            .with_single_cert(tls_certs, rustls::pki_types::PrivateKeyDer::Pkcs8(tls_key))
            .unwrap();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(sentry_actix::Sentry::new())
                .wrap(api_service_cors())
                .configure(api_service_routes(api_service_data.clone()))
        })
            .keep_alive(Duration::from_secs(api_server_config.keep_alive))
            .client_request_timeout(Duration::from_secs(api_server_config.request_timeout))
            .client_disconnect_timeout(Duration::from_secs(api_server_config.disconnect_timeout))
            .max_connections(api_server_config.max_connections as usize)
            .max_connection_rate(api_server_config.tls_connection_rate as usize)
            .workers(api_server_config.threads as usize)
            .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)
            .unwrap()
            .disable_signals()
            .run();

        return (server.handle(), server);
    }

    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(api_service_cors())
            .configure(api_service_routes(api_service_data.clone()))
    })
        .keep_alive(Duration::from_secs(api_server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(api_server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(api_server_config.disconnect_timeout))
        .max_connections(api_server_config.max_connections as usize)
        .workers(api_server_config.threads as usize)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}

pub async fn api_service_token(token: Option<String>, config: Arc<Configuration>) -> Option<HttpResponse>
{
    match token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if token_code != config.tracker_config.api_key {
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

/// Resolves the client address, honoring the configured real IP header
/// only when the listener is marked as sitting behind trusted proxies.
pub fn api_service_retrieve_remote_ip(request: &HttpRequest, config: &ApiServerConfig) -> Result<IpAddr, ()>
{
    let origin_ip = match request.peer_addr() {
        None => {
            return Err(());
        }
        Some(ip) => {
            ip.ip()
        }
    };
    if !config.trusted_proxies {
        return Ok(origin_ip);
    }
    match request.headers().get(config.real_ip.clone()) {
        Some(header) => {
            if header.to_str().is_ok() {
                if let Ok(ip) = IpAddr::from_str(header.to_str().unwrap()) {
                    Ok(ip)
                } else {
                    Err(())
                }
            } else {
                Err(())
            }
        }
        None => {
            Ok(origin_ip)
        }
    }
}

pub async fn api_validation(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> Option<HttpResponse>
{
    let ip = match api_service_retrieve_remote_ip(request, &data.api_server_config) {
        Ok(ip) => ip,
        Err(_) => {
            return Some(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid ip"
            })));
        }
    };
    if ip.is_ipv4() {
        data.game_tracker.update_stats(StatsEvent::Tcp4ConnectionsHandled, 1);
        data.game_tracker.update_stats(StatsEvent::Tcp4ApiHandled, 1);
    } else {
        data.game_tracker.update_stats(StatsEvent::Tcp6ConnectionsHandled, 1);
        data.game_tracker.update_stats(StatsEvent::Tcp6ApiHandled, 1);
    }
    None
}

/// Storage broke mid-request. Counts the failure for the client's address
/// family and answers with a plain 500 so engine details never leak out.
pub fn api_service_failure(request: &HttpRequest, data: &Data<Arc<ApiServiceData>>) -> HttpResponse
{
    match api_service_retrieve_remote_ip(request, &data.api_server_config) {
        Ok(ip) if ip.is_ipv6() => {
            data.game_tracker.update_stats(StatsEvent::Tcp6Failure, 1);
        }
        _ => {
            data.game_tracker.update_stats(StatsEvent::Tcp4Failure, 1);
        }
    }
    HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
        "status": "internal server error"
    }))
}

pub async fn api_parse_body(mut payload: web::Payload) -> Result<web::BytesMut, CustomError>
{
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = match chunk {
            Ok(data) => data,
            Err(_) => {
                return Err(CustomError::new("chunk error"));
            }
        };
        if (body.len() + chunk.len()) > MAX_BODY_BYTES {
            return Err(CustomError::new("body overflow"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

pub async fn api_service_not_found(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    match api_service_retrieve_remote_ip(&request, &data.api_server_config) {
        Ok(ip) => {
            if ip.is_ipv4() {
                data.game_tracker.update_stats(StatsEvent::Tcp4ConnectionsHandled, 1);
                data.game_tracker.update_stats(StatsEvent::Tcp4NotFound, 1);
            } else {
                data.game_tracker.update_stats(StatsEvent::Tcp6ConnectionsHandled, 1);
                data.game_tracker.update_stats(StatsEvent::Tcp6NotFound, 1);
            }
        }
        Err(_) => {
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid ip"
            }));
        }
    }

    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
