use std::sync::Arc;

use wayfare_core::repository::{
    BookingRepository, CityRepository, FlightGateway, SessionStore, UserRepository,
};

/// Request-time policy knobs carried alongside the injected services.
#[derive(Clone)]
pub struct RuntimePolicy {
    pub session_cookie: String,
    pub max_booking_details_bytes: usize,
    pub static_dir: String,
}

/// Dependency-injected services. Everything is constructed once at startup
/// and handed to the router; handlers hold no ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub flights: Arc<dyn FlightGateway>,
    pub policy: RuntimePolicy,
}
