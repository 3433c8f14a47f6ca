use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use wayfare_core::models::{Session, User};
use wayfare_core::repository::SessionStore;
use wayfare_core::StoreError;

/// Sessions live in Redis as one hash per token, expired by TTL. The token
/// handed to the client is an opaque v4 UUID; expiry is sliding, refreshed
/// on every successful lookup.
pub struct RedisSessionStore {
    client: redis::Client,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    pub fn new(connection_string: &str, ttl_seconds: u64) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self {
            client,
            ttl_seconds,
        })
    }

    fn key(token: &str) -> String {
        format!("session:{}", token)
    }
}

fn map_redis_err(e: redis::RedisError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, user: &User) -> Result<String, StoreError> {
        let token = Uuid::new_v4().to_string();
        let key = Self::key(&token);

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_err)?;

        let _: () = redis::pipe()
            .atomic()
            .hset(&key, "user_id", user.id.to_string())
            .hset(&key, "name", &user.name)
            .hset(&key, "email", &user.email)
            .expire(&key, self.ttl_seconds as i64)
            .query_async(&mut conn)
            .await
            .map_err(map_redis_err)?;

        Ok(token)
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, StoreError> {
        let key = Self::key(token);

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_err)?;

        let fields: HashMap<String, String> =
            conn.hgetall(&key).await.map_err(map_redis_err)?;

        if fields.is_empty() {
            return Ok(None);
        }

        let user_id = fields
            .get("user_id")
            .and_then(|v| Uuid::parse_str(v).ok())
            .ok_or_else(|| StoreError::Unavailable("corrupt session record".to_string()))?;

        // Sliding expiry: a live session stays alive while it is used.
        let _: () = conn
            .expire(&key, self.ttl_seconds as i64)
            .await
            .map_err(map_redis_err)?;

        Ok(Some(Session {
            user_id,
            name: fields.get("name").cloned().unwrap_or_default(),
            email: fields.get("email").cloned().unwrap_or_default(),
        }))
    }

    async fn destroy(&self, token: &str) -> Result<(), StoreError> {
        let key = Self::key(token);

        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(map_redis_err)?;

        let _: () = conn.del(&key).await.map_err(map_redis_err)?;
        Ok(())
    }
}
