//! Middleware for sessions and authorization.

mod auth;
mod session;

pub use auth::{admin_gate, require_admin, session_gate, session_id, CurrentUser, LOGIN_PATH};
pub use session::{
    MemorySessionStore, RedisSessionStore, SessionStore, SessionUser, SESSION_COOKIE,
};
