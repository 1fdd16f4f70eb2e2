//! ORCID JSKOS Server
//!
//! A JSKOS API wrapper for ORCID. Looks up researcher profiles by ORCID iD or
//! searches them by free text, and maps each profile to a JSKOS concept with labels,
//! biography, homepage, Wikipedia links and keywords.
//!
//! # Features
//!
//! - **Lookup**: by bare ORCID iD, `http://orcid.org/` URI or request path
//! - **Search**: Lucene-escaped full-text search
//! - **OAuth**: client-credentials token exchange, optional token cache
//! - **Transports**: HTTP (axum) and line-delimited JSON over stdio
//!
//! # Example
//!
//! ```no_run
//! use orcid_jskos::{config::Config, models::ConceptQuery, service::OrcidService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = OrcidService::from_config(Config::from_env()?)?;
//!     let page = service.query(&ConceptQuery::notation("0000-0002-1825-0097")).await;
//!     println!("{} concept(s)", page.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod identifier;
pub mod lucene;
pub mod mapper;
pub mod models;
pub mod server;
pub mod service;

pub use client::OrcidClient;
pub use config::Config;
pub use error::{ClientError, ServiceError};
pub use service::OrcidService;
