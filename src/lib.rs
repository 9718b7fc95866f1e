//! # imgor - Content-Addressed Image Hosting
//!
//! Clients upload an image over HTTP; the server sniffs its real type from
//! the leading bytes, names it after a digest of its content, stores it
//! locally or in an object store and serves it back at `/<id>.<ext>`.
//!
//! ## Architecture Layers
//!
//! - **Domain**: media types, image identifiers, signature sniffing
//! - **Application**: the image store port and the ingest/retrieve use cases
//! - **Infrastructure**: local filesystem and object-store adapters
//! - **API**: HTTP handlers and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use imgor::application::context::ImageContext;
//! use imgor::infrastructure::storage::ObjectStore;
//! use imgor::use_cases::{IngestImageUseCase, RetrieveImageUseCase};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let context = ImageContext::new(Arc::new(ObjectStore::memory()?));
//! let ingested = IngestImageUseCase::new(&context)
//!     .execute(&[0xff, 0xd8, 0xff, 0xe0])
//!     .await?;
//! let retrieved = RetrieveImageUseCase::new(&context)
//!     .execute(&ingested.id)
//!     .await?;
//! assert_eq!(retrieved.media_type.extension(), "jpg");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{sniffer, value_objects};
