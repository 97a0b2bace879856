//! Issued-token registry.
//!
//! Replaces the two inconsistent legacy stubs (accept-any-nonempty-token and
//! unconditional success) with a single capability: a token is valid only if
//! this registry issued it and its TTL has not elapsed.

use crate::auth::credentials::Role;
use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Principal {
    pub username: String,
    pub role: Role,
}

pub struct TokenRegistry {
    tokens: Cache<String, Principal>,
}

impl TokenRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Mints an opaque token for the principal and records it until expiry.
    pub async fn issue(&self, username: &str, role: Role) -> String {
        let token = Uuid::new_v4().to_string();
        self.tokens
            .insert(token.clone(), Principal { username: username.to_string(), role })
            .await;
        token
    }

    /// The principal behind the token, or `None` for absent, empty, unknown
    /// and expired tokens alike.
    pub async fn authorize(&self, token: Option<&str>) -> Option<Principal> {
        let token = token?.trim();
        if token.is_empty() {
            return None;
        }
        self.tokens.get(token).await
    }
}
