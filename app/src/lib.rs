mod config;
mod database;
mod modules;
mod server;
mod utils;

use config::app_config;
use sea_orm::DatabaseConnection;
use signal_hook::{
    consts::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cfg = app_config();

    let db = database::db::connect(&cfg.db_url).await;

    database::db::run_migrations(&db).await;

    listen_to_shutdown_signals(!cfg.is_development, db.clone());

    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), cfg.http_port);
    println!("[WEB] soon listening on {}", addr);

    let server = server::controller::new(db).into_make_service();

    axum::Server::bind(&addr)
        .serve(server)
        .await
        .unwrap_or_else(|_| panic!("[WEB] failed to serve app on address {}", addr));
}

/// Listen to shutdown signals `SIGINT` and `SIGTERM`, on a signal gracefully shutdowns down the application
fn listen_to_shutdown_signals(gracefully_shutdown: bool, db: DatabaseConnection) {
    let mut signals = Signals::new([SIGINT, SIGTERM]).expect("failed to setup signals hook");

    tokio::spawn(async move {
        if let Some(sig) = signals.forever().next() {
            if gracefully_shutdown {
                println!("[APP] received signal: {}, shutting down", sig);

                println!("[APP] closing postgres connections");
                if let Err(e) = db.close().await {
                    println!("[DB] failed to close db connection: {e}")
                }
            }

            std::process::exit(sig)
        }
    });
}
