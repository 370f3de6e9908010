//! Text comparison service.
//!
//! Scores how similar two text documents are: each document is reduced to its
//! core words (lowercased, punctuation stripped, stop words removed) and the
//! two word sets are compared with Jaccard similarity.
//!
//! - **`utils`**: the normalizer, the stop word set and the similarity strategies.
//! - **`services`**: `CompareService`, which owns the shared configuration of a
//!   comparison, and the `TextSource` collaborators that supply raw text.
//! - **`config`**: layered configuration (defaults, file, environment).
//! - **`cli`**: argument handling and the run loop of the `text-compare` binary.
//! - **`handlers`**, **`routes`**, **`models`**: the actix-web HTTP surface.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::time::Instant;

use crate::config::Config;
use crate::services::CompareService;

pub use error::{CompareError, Result};

#[derive(Clone)]
pub struct AppState {
    pub compare_service: CompareService,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let compare_service = CompareService::from_config(&config.comparison)?;
        Ok(Self {
            compare_service,
            config,
            start_time: Instant::now(),
        })
    }
}

/// Installs the `tracing` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
