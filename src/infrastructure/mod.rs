//! Infrastructure layer - Concrete artifact implementations and process setup

pub mod artifacts;
pub mod logging;
