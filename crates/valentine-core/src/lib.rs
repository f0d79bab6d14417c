//! Valentine Card Core Library
//!
//! State, particles and photo ingestion behind the valentine card.
//!
//! ## Overview
//!
//! The card is a single page: a hero image, a story and gallery section, and
//! a final question whose answer sets off confetti, falling hearts and a
//! reward modal. Users can upload their own photos (legacy HEIC/HEIF files
//! are converted to JPEG) and switch between two content modes.
//!
//! - [`decorations`]: randomized confetti, heart and cursor-heart descriptors
//! - [`ingest`]: upload classification, conversion and partial-failure notices
//! - [`particles`]: particle collections with spawn and expiry timing; the
//!   cursor trail is owned apart from the session
//! - [`session`]: the state container the page renders from
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Instant;
//! use valentine_core::{CardSession, DataUrlFactory, IngestionPipeline, JpegConverter, QuizOption};
//!
//! let mut session = CardSession::new(Arc::new(DataUrlFactory::new()));
//! let pipeline = IngestionPipeline::new(JpegConverter::default());
//!
//! let outcome = session.ingest(&pipeline, files).await;
//! session.select_option(QuizOption::A, Instant::now());
//! ```

pub mod decorations;
pub mod error;
pub mod ingest;
pub mod particles;
pub mod session;
pub mod timers;
pub mod types;

// Re-exports
pub use error::{CardError, CardResult};
pub use ingest::{
    BlobRefFactory, DataUrlFactory, FormatConverter, IngestOutcome, IngestionPipeline,
    JpegConverter, PreparedBatch, UploadedFile, UrlRegistry,
};
pub use particles::{CursorTrail, ParticleStore};
pub use session::{CardSession, CardSnapshot};
pub use timers::{TimerId, TimerQueue};
pub use types::*;
