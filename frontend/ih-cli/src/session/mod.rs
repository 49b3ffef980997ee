pub(crate) mod auth_session;
pub(crate) mod session_store;

pub use auth_session::AuthSession;
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
