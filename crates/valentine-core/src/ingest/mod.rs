//! Photo upload ingestion.
//!
//! ```text
//! files ──► classify ──► legacy? ──yes──► FormatConverter ──ok──► prepared
//!                          │                    │
//!                          no                  err ──► failed names
//!                          └────────────────────────────► prepared
//!
//! prepared ──► BlobRefFactory ──► Photo (fresh id) ──► UrlRegistry
//! ```
//!
//! Conversion runs in two stages so callers never hold session state across
//! an await: [`IngestionPipeline::prepare`] is async and touches nothing but
//! the converter, [`PreparedBatch::finish`] is synchronous and mints photos.

mod blob_ref;
mod convert;

use std::path::Path;

use crate::error::CardResult;
use crate::types::{Photo, PhotoId, UploadNotice};

pub use blob_ref::{BlobRefFactory, DataUrlFactory, UrlRegistry};
pub use convert::{converted_name, needs_conversion, FormatConverter, JpegConverter, DEFAULT_JPEG_QUALITY};

/// Media type for content neither the name nor the bytes identify
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Extensions offered by the upload picker. A hint, not enforced.
pub const ACCEPTED_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "webp", "gif", "bmp", "heic", "heif"];

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    /// Declared media type; may be empty when the caller did not know it
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a file from disk. The media type comes from the extension, or
    /// from the leading bytes when the extension is unknown.
    pub async fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = display_name(path);
        let media_type = media_type_for(&name, &bytes).to_string();
        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }
}

/// Name shown to the user for a picked path
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Media type for an upload: the extension's if known, else sniffed from
/// the content, else [`FALLBACK_MEDIA_TYPE`].
pub fn media_type_for(name: &str, bytes: &[u8]) -> &'static str {
    match media_type_for_name(name) {
        "" => image::guess_format(bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MEDIA_TYPE),
        known => known,
    }
}

/// Media type implied by a file name's extension, empty if unknown.
pub fn media_type_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => "",
    }
}

/// Files that survived classification and conversion, in input order.
#[derive(Debug, Default)]
pub struct PreparedBatch {
    pub prepared: Vec<UploadedFile>,
    /// Original names of files whose conversion failed, in input order
    pub failed: Vec<String>,
}

impl PreparedBatch {
    /// The notice this batch produces. An empty selection produces none.
    pub fn notice(&self) -> Option<UploadNotice> {
        if self.prepared.is_empty() && !self.failed.is_empty() {
            Some(UploadNotice::AllFailed)
        } else if !self.failed.is_empty() {
            Some(UploadNotice::PartialFailed {
                names: self.failed.clone(),
            })
        } else {
            None
        }
    }

    /// Mint a photo per prepared file. Each display url is tracked in
    /// `registry` for release at teardown.
    pub fn finish(self, factory: &dyn BlobRefFactory, registry: &mut UrlRegistry) -> IngestOutcome {
        let notice = self.notice();

        let accepted: Vec<Photo> = self
            .prepared
            .into_iter()
            .map(|file| {
                let url = factory.create_ref(&file);
                registry.track(url.clone());
                Photo {
                    id: PhotoId::new(),
                    name: file.name,
                    url,
                }
            })
            .collect();

        tracing::info!(
            accepted = accepted.len(),
            failed = self.failed.len(),
            "Upload batch ingested"
        );

        IngestOutcome { accepted, notice }
    }
}

/// Result of one upload batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// New photos in input order
    pub accepted: Vec<Photo>,
    pub notice: Option<UploadNotice>,
}

/// Classifies uploads and converts legacy formats.
#[derive(Debug, Clone)]
pub struct IngestionPipeline<C> {
    converter: C,
}

impl<C: FormatConverter> IngestionPipeline<C> {
    pub fn new(converter: C) -> Self {
        Self { converter }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Convert what needs converting, sequentially. Conversion failures are
    /// recorded by original name and never escape this call.
    pub async fn prepare(&self, files: Vec<UploadedFile>) -> PreparedBatch {
        let mut batch = PreparedBatch::default();
        for file in files {
            self.prepare_one(file, &mut batch).await;
        }
        batch
    }

    /// Read and prepare picked files. A file that cannot be read is reported
    /// by name like a failed conversion, in selection order.
    pub async fn prepare_paths<P: AsRef<Path>>(&self, paths: &[P]) -> PreparedBatch {
        let mut batch = PreparedBatch::default();
        for path in paths {
            let path = path.as_ref();
            match UploadedFile::from_path(path).await {
                Ok(file) => self.prepare_one(file, &mut batch).await,
                Err(e) => {
                    let name = display_name(path);
                    tracing::warn!(file = %name, error = %e, "Upload could not be read");
                    batch.failed.push(name);
                }
            }
        }
        batch
    }

    async fn prepare_one(&self, file: UploadedFile, batch: &mut PreparedBatch) {
        if !needs_conversion(&file) {
            batch.prepared.push(file);
            return;
        }

        let original_name = file.name.clone();
        match self.converter.convert(file).await {
            Ok(converted) => {
                tracing::debug!(from = %original_name, to = %converted.name, "Converted upload");
                batch.prepared.push(converted);
            }
            Err(e) => {
                tracing::warn!(file = %original_name, error = %e, "Upload conversion failed");
                batch.failed.push(original_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_for_name() {
        assert_eq!(media_type_for_name("a.JPG"), "image/jpeg");
        assert_eq!(media_type_for_name("b.heif"), "image/heif");
        assert_eq!(media_type_for_name("noext"), "");
        assert_eq!(media_type_for_name("archive.tar.gz"), "");
    }

    #[test]
    fn test_unknown_extension_sniffs_content() {
        assert_eq!(media_type_for("scan.tiff", b"II*\0rest-of-header"), "image/tiff");
        assert_eq!(media_type_for("photo", b"\x89PNG\r\n\x1a\n...."), "image/png");
        assert_eq!(media_type_for("notes.avif.bak", b"plain text"), FALLBACK_MEDIA_TYPE);
        // A known extension wins over the content
        assert_eq!(media_type_for("x.jpg", b"\x89PNG\r\n\x1a\n"), "image/jpeg");
    }

    #[test]
    fn test_notice_policy() {
        let ok = UploadedFile::new("b.jpg", "image/jpeg", vec![]);

        let empty = PreparedBatch::default();
        assert_eq!(empty.notice(), None);

        let all_failed = PreparedBatch {
            prepared: vec![],
            failed: vec!["a.heic".into()],
        };
        assert_eq!(all_failed.notice(), Some(UploadNotice::AllFailed));

        let partial = PreparedBatch {
            prepared: vec![ok.clone()],
            failed: vec!["a.heic".into()],
        };
        assert_eq!(
            partial.notice(),
            Some(UploadNotice::PartialFailed {
                names: vec!["a.heic".into()]
            })
        );

        let clean = PreparedBatch {
            prepared: vec![ok],
            failed: vec![],
        };
        assert_eq!(clean.notice(), None);
    }

    #[tokio::test]
    async fn test_from_path_reads_name_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sunset.PNG");
        tokio::fs::write(&path, b"bytes").await.unwrap();

        let file = UploadedFile::from_path(&path).await.unwrap();
        assert_eq!(file.name, "Sunset.PNG");
        assert_eq!(file.media_type, "image/png");
        assert_eq!(file.bytes, b"bytes");
    }

    #[tokio::test]
    async fn test_from_path_never_declares_empty_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.dat");
        tokio::fs::write(&path, b"not an image").await.unwrap();

        let file = UploadedFile::from_path(&path).await.unwrap();
        assert_eq!(file.media_type, FALLBACK_MEDIA_TYPE);
    }
}
