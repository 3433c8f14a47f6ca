use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfare_api::{
    app,
    state::{AppState, RuntimePolicy},
};
use wayfare_store::{
    DbClient, PgBookingRepository, PgCityRepository, PgUserRepository, RedisSessionStore,
    SkyRelayGateway,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wayfare_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = wayfare_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Wayfare API on port {}", config.server.port);

    // Postgres: users, cities, bookings
    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    // Redis: session records
    let sessions = RedisSessionStore::new(&config.redis.url, config.session.ttl_seconds)
        .expect("Failed to create Redis client");

    // Upstream flight-search relay
    let flights =
        SkyRelayGateway::new(&config.flight_api).expect("Failed to build upstream HTTP client");

    let app_state = AppState {
        users: Arc::new(PgUserRepository::new(db.pool.clone())),
        cities: Arc::new(PgCityRepository::new(db.pool.clone())),
        bookings: Arc::new(PgBookingRepository::new(db.pool.clone())),
        sessions: Arc::new(sessions),
        flights: Arc::new(flights),
        policy: RuntimePolicy {
            session_cookie: config.session.cookie_name.clone(),
            max_booking_details_bytes: config.limits.max_booking_details_bytes,
            static_dir: config.server.static_dir.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
