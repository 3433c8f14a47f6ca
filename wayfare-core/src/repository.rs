use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Booking, City, FlightQuery, Session, User};
use crate::{GatewayError, StoreError};

/// Credential store. Email uniqueness is enforced here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Fails with [`StoreError::DuplicateEmail`] if the
    /// email is already registered.
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// Read-only city/hotspot catalog.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<City>, StoreError>;

    /// Case-insensitive substring match anywhere in the city name.
    async fn search_by_name(&self, fragment: &str) -> Result<Vec<City>, StoreError>;
}

/// Booking ledger scoped to the owning user.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(
        &self,
        owner_email: &str,
        kind: &str,
        details: &serde_json::Value,
    ) -> Result<Booking, StoreError>;

    async fn list_by_owner(&self, owner_email: &str) -> Result<Vec<Booking>, StoreError>;

    /// Delete a booking only if both id and owner match. Returns `false`
    /// when nothing matched; "not found" and "not yours" are deliberately
    /// indistinguishable to the caller.
    async fn delete_by_owner_and_id(
        &self,
        owner_email: &str,
        id: Uuid,
    ) -> Result<bool, StoreError>;
}

/// Server-side session records keyed by an opaque cookie token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Create a session for an authenticated user and return its token.
    async fn create(&self, user: &User) -> Result<String, StoreError>;

    /// Resolve a token, refreshing the idle-expiry clock on hit.
    async fn get(&self, token: &str) -> Result<Option<Session>, StoreError>;

    async fn destroy(&self, token: &str) -> Result<(), StoreError>;
}

/// Relay to the external flight-search provider. Pure pass-through: no
/// retries, no caching, no normalization of the payload.
#[async_trait]
pub trait FlightGateway: Send + Sync {
    async fn search(&self, query: &FlightQuery) -> Result<serde_json::Value, GatewayError>;
}
