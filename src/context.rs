//! Session context provider for the valentine card.
//!
//! Provides the CardSession, the cursor trail and the upload pipeline to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut session = use_session();
//! session.write().toggle_mode();
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use valentine_core::{CardSession, CursorTrail, IngestionPipeline, JpegConverter, Mode};

/// Upload pipeline shared with async upload tasks
pub type SharedPipeline = Arc<IngestionPipeline<JpegConverter>>;

/// Get the assets directory for the application.
pub fn assets_dir() -> PathBuf {
    crate::get_assets_dir()
}

/// Mode the session starts in.
pub fn start_mode() -> Mode {
    crate::get_start_mode()
}

/// Display url for a bundled asset.
pub fn asset_url(file_name: &str) -> String {
    assets_dir()
        .join(file_name.trim_start_matches('/'))
        .to_string_lossy()
        .into_owned()
}

/// Hook to access the card session from context.
pub fn use_session() -> Signal<CardSession> {
    use_context::<Signal<CardSession>>()
}

/// Hook to access the cursor trail from context.
pub fn use_cursor_trail() -> Signal<CursorTrail> {
    use_context::<Signal<CursorTrail>>()
}

/// Hook to access the upload pipeline from context.
pub fn use_pipeline() -> SharedPipeline {
    use_context::<SharedPipeline>()
}
