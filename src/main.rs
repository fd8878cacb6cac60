use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use biblioteca::clock::{Clock, SystemClock};
use biblioteca::config::Config;
use biblioteca::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).try_init() {
        eprintln!("tracing init failed: {e}");
    }

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let pool = db::connect(&config.sqlite_path)
        .await
        .map_err(std::io::Error::other)?;
    info!(path = %config.sqlite_path, "connected to SQLite");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let clock = web::Data::from(clock);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(clock.clone())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))
    .inspect_err(|e| warn!(host = %config.host, port = config.port, error = %e, "bind failed"))?;

    info!(host = %config.host, port = config.port, "listening");
    server.run().await
}
