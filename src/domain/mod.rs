//! Domain layer - Core types and the artifact capability traits

pub mod artifacts;
pub mod error;
pub mod transaction;

pub use artifacts::{CategoryEncoder, FraudModel};
pub use error::{LoadError, PredictError};
pub use transaction::TransactionForm;
