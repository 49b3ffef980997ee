mod auth_session;
mod session_store;
