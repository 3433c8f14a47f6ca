pub mod app_config;
pub mod booking_repo;
pub mod city_repo;
pub mod database;
pub mod flight_gateway;
pub mod session_store;
pub mod user_repo;

pub use booking_repo::PgBookingRepository;
pub use city_repo::PgCityRepository;
pub use database::DbClient;
pub use flight_gateway::SkyRelayGateway;
pub use session_store::RedisSessionStore;
pub use user_repo::PgUserRepository;
