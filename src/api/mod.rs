//! HTTP surface

pub mod health;
pub mod pages;
pub mod predict;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
