pub mod compare_service;
pub mod ingest_service;

pub use compare_service::*;
pub use ingest_service::*;
