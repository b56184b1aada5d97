use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use nearby_locations::config::{LoggingSettings, Settings, StorageBackend};
use nearby_locations::routes::{self, AppState};
use nearby_locations::services::{
    LocationStore, MemoryLocationStore, PostgresLocationStore, TollGuruClient, TripCostProvider,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return Err(startup_error("Failed to load configuration", e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting nearby locations service...");

    let store: Arc<dyn LocationStore> = match settings.storage.backend {
        StorageBackend::Postgres => {
            let db = &settings.database;
            let postgres = PostgresLocationStore::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| startup_error("Failed to connect to PostgreSQL", e))?;

            info!(
                "PostgreSQL store initialized (max: {} connections)",
                db.max_connections.unwrap_or(10)
            );
            Arc::new(postgres)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory store; locations are lost on restart");
            Arc::new(MemoryLocationStore::new())
        }
    };

    let trip_cost_settings = &settings.trip_cost;
    if trip_cost_settings.api_key.as_deref().unwrap_or("").is_empty() {
        warn!("TOLLGURU_API_KEY not set; trip cost requests will fail");
    }

    let trip_cost: Arc<dyn TripCostProvider> = Arc::new(
        TollGuruClient::new(
            trip_cost_settings.endpoint.clone(),
            trip_cost_settings.api_key.clone(),
            trip_cost_settings.vehicle_type.clone(),
            Duration::from_secs(trip_cost_settings.timeout_secs),
        )
        .map_err(|e| startup_error("Failed to initialize trip cost client", e))?,
    );

    info!("Trip cost client initialized ({})", trip_cost_settings.endpoint);

    let app_state = AppState::new(store, trip_cost, settings.server.request_policy);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!(
        "Starting HTTP server on {}:{} (request policy: {:?})",
        host, port, settings.server.request_policy
    );

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
