//! Session stores mapping a session id to the logged-in user.
//!
//! Sessions never expire and are not rotated; they live until logout.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, RedisError};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use common::AppResult;
use domain::User;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "FORESTSESSIONID";

/// Key prefix of session entries in Redis
const SESSION_KEY_PREFIX: &str = "session:";

/// What a session remembers about its user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
    pub full_name: Option<String>,
    /// Role label as stored on the account
    pub role: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role.clone(),
        }
    }
}

/// Session store trait for dependency injection.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Open a session and return its id
    async fn create(&self, user: SessionUser) -> AppResult<Uuid>;

    async fn get(&self, id: &Uuid) -> AppResult<Option<SessionUser>>;

    /// Forget a session; unknown ids are ignored
    async fn destroy(&self, id: &Uuid) -> AppResult<()>;
}

/// In-process session store.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Uuid, SessionUser>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user: SessionUser) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        self.sessions.write().await.insert(id, user);
        Ok(id)
    }

    async fn get(&self, id: &Uuid) -> AppResult<Option<SessionUser>> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn destroy(&self, id: &Uuid) -> AppResult<()> {
        self.sessions.write().await.remove(id);
        Ok(())
    }
}

/// Redis-backed session store, shared by every web process.
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    /// Connect to Redis.
    pub async fn connect(url: &str) -> Result<Self, RedisError> {
        debug!("Connecting to session store at {}", url);
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn })
    }

    fn key(id: &Uuid) -> String {
        format!("{}{}", SESSION_KEY_PREFIX, id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, user: SessionUser) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let json = serde_json::to_string(&user)
            .map_err(|e| common::AppError::internal(format!("Serialization error: {}", e)))?;

        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(Self::key(&id), json).await?;
        debug!(user_id = user.user_id, "Session stored");
        Ok(id)
    }

    async fn get(&self, id: &Uuid) -> AppResult<Option<SessionUser>> {
        let mut conn = self.conn.clone();
        let json: Option<String> = conn.get(Self::key(id)).await?;

        match json {
            Some(json) => match serde_json::from_str(&json) {
                Ok(user) => Ok(Some(user)),
                Err(e) => {
                    warn!("Discarding unreadable session {}: {}", id, e);
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }

    async fn destroy(&self, id: &Uuid) -> AppResult<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::key(id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> SessionUser {
        SessionUser {
            user_id: 1,
            username: "admin".into(),
            full_name: Some("Administrador".into()),
            role: "admin".into(),
        }
    }

    #[tokio::test]
    async fn memory_sessions_live_until_destroyed() {
        let store = MemorySessionStore::new();
        let id = store.create(admin()).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap(), Some(admin()));

        store.destroy(&id).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn each_login_gets_its_own_session() {
        let store = MemorySessionStore::new();
        let first = store.create(admin()).await.unwrap();
        let second = store.create(admin()).await.unwrap();

        assert_ne!(first, second);
        store.destroy(&first).await.unwrap();
        assert!(store.get(&second).await.unwrap().is_some());
    }
}
