//! Fraud Verdict
//!
//! A small web service that loads a pre-trained transaction classifier and a
//! category encoder at startup, serves an HTML form, and renders a
//! fraud/safe verdict per submission.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
