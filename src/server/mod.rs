//! HTTP server: router, shared state, and route handlers.

mod routes;

pub use routes::{app_router, AppState, FALLBACK_RESPOSTA, LIVENESS_MESSAGE};
