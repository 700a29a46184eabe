use std::mem;
use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::info;
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use guesstats_actix::api::api::api_service;
use guesstats_actix::common::common::{api_check_host_and_port_used, setup_logging};
use guesstats_actix::config::structs::configuration::Configuration;
use guesstats_actix::stats::enums::stats_event::StatsEvent;
use guesstats_actix::structs::Cli;
use guesstats_actix::tracker::structs::game_tracker::GameTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(GameTracker::new(config.clone(), args.create_database).await);

            let db_config = tracker.config.database.clone();

            if db_config.persistent {
                tracker.load_players().await;
                tracker.load_nicknames().await;
            }

            if args.create_selfsigned { tracker.cert_gen(&args).await; }

            let tokio_core = Builder::new_multi_thread().thread_name("core").worker_threads(9).enable_all().build()?;
            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio_core.spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let mut api_futures = Vec::new();
            let mut apis_futures = Vec::new();

            for api_server_object in &config.api_server {
                if api_server_object.enabled {
                    api_check_host_and_port_used(api_server_object.bind_address.clone());
                    let address: SocketAddr = api_server_object.bind_address.parse().unwrap();

                    let (handle, future) = api_service(
                        address,
                        tracker.clone(),
                        api_server_object.clone()
                    ).await;

                    if api_server_object.ssl {
                        apis_futures.push((handle, future));
                    } else {
                        api_futures.push((handle, future));
                    }
                }
            }

            if !api_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = api_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }
            if !apis_futures.is_empty() {
                let (handles, futures): (Vec<_>, Vec<_>) = apis_futures.into_iter().unzip();
                tokio_core.spawn(async move {
                    let _ = try_join_all(futures).await;
                    drop(handles);
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio_core.spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp() + console_interval as i64);
                            let stats = tracker_spawn_stats.get_stats();

                            info!(
                                "[STATS] Players: {} - Nicknames: {} | Games: {} - Wins: {} - Losses: {}",
                                stats.players, stats.nicknames, stats.games_recorded,
                                stats.wins_recorded, stats.losses_recorded
                            );

                            info!(
                                "[STATS TCP] IPv4: Conn:{} API:{} F:{} 404:{} | IPv6: Conn:{} API:{} F:{} 404:{}",
                                stats.tcp4_connections_handled, stats.tcp4_api_handled,
                                stats.tcp4_failure, stats.tcp4_not_found,
                                stats.tcp6_connections_handled, stats.tcp6_api_handled,
                                stats.tcp6_failure, stats.tcp6_not_found
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    info!("Server shutting down completed");

                    mem::forget(tokio_core);
                    Ok(())
                }
            }
        })
}
