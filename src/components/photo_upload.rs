//! Photo Upload Component
//!
//! Multi-file picker feeding the ingestion pipeline. HEIC/HEIF files are
//! converted to JPEG; failures come back as an upload notice.

use dioxus::prelude::*;
use rfd::FileDialog;
use valentine_core::ingest::ACCEPTED_EXTENSIONS;

use crate::context::{use_pipeline, use_session};

/// Upload button.
///
/// Disabled while a batch is converting, so batches never overlap.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     PhotoUpload { label: "Upload your photos".to_string() }
/// }
/// ```
#[component]
pub fn PhotoUpload(
    /// Button label
    label: String,
) -> Element {
    let mut session = use_session();
    let pipeline = use_pipeline();
    let mut uploading = use_signal(|| false);

    let handle_upload = move |_| {
        if uploading() {
            return;
        }
        uploading.set(true);
        let pipeline = pipeline.clone();

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &ACCEPTED_EXTENSIONS)
                    .set_title("Select Photos")
                    .pick_files()
            })
            .await;

            let paths = match picked {
                Ok(Some(paths)) => paths,
                Ok(None) => {
                    // User cancelled
                    uploading.set(false);
                    return;
                }
                Err(e) => {
                    tracing::error!("File picker error: {}", e);
                    uploading.set(false);
                    return;
                }
            };

            // Unreadable files come back as failed names in the notice
            if !paths.is_empty() {
                session.write().begin_upload();
                let batch = pipeline.prepare_paths(paths.as_slice()).await;
                session.write().apply_batch(batch);
            }

            uploading.set(false);
        });
    };

    rsx! {
        button {
            class: "upload-button",
            r#type: "button",
            onclick: handle_upload,
            disabled: uploading(),
            if uploading() {
                "Preparing photos..."
            } else {
                "{label}"
            }
        }
    }
}
