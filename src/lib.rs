//! Résumé review and job matching service.
//!
//! The scoring core lives in [`review`] and [`matching`]: pure heuristics
//! over a file name and extracted plain text. Everything else is plumbing
//! around it: upload ingestion, the extraction-service client, the
//! in-process registry and the Rocket API.

pub mod applications;
pub mod config;
pub mod extraction;
pub mod matching;
pub mod resumes;
pub mod review;
pub mod store;
pub mod utils;
pub mod web;

pub use config::AppConfig;
pub use review::ReviewEngine;
pub use web::start_web_server;
