//! Display references for uploaded photos.

use std::collections::HashMap;

use base64::Engine;
use parking_lot::Mutex;

use super::{media_type_for, UploadedFile};

/// Creates and releases display urls for prepared files.
///
/// Every url returned by `create_ref` must be released exactly once.
pub trait BlobRefFactory: Send + Sync {
    fn create_ref(&self, file: &UploadedFile) -> String;
    fn release_ref(&self, url: &str);
}

/// Builds `data:` urls the webview can show without a file server.
///
/// Identical uploads yield identical urls, so live references are counted
/// rather than kept in a set.
#[derive(Debug, Default)]
pub struct DataUrlFactory {
    live: Mutex<HashMap<String, usize>>,
}

impl DataUrlFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of references created and not yet released
    pub fn live_refs(&self) -> usize {
        self.live.lock().values().sum()
    }
}

impl BlobRefFactory for DataUrlFactory {
    fn create_ref(&self, file: &UploadedFile) -> String {
        let media_type = match file.media_type.as_str() {
            "" => media_type_for(&file.name, &file.bytes),
            declared => declared,
        };
        let payload = base64::engine::general_purpose::STANDARD.encode(&file.bytes);
        let url = format!("data:{};base64,{}", media_type, payload);
        *self.live.lock().entry(url.clone()).or_insert(0) += 1;
        url
    }

    fn release_ref(&self, url: &str) {
        let mut live = self.live.lock();
        match live.get_mut(url) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                live.remove(url);
            }
            None => tracing::warn!("Released a display url that is not live"),
        }
    }
}

/// Session-owned record of every url handed out, released at teardown.
#[derive(Debug, Default)]
pub struct UrlRegistry {
    urls: Vec<String>,
}

impl UrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, url: String) {
        self.urls.push(url);
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Release every tracked url. Draining makes a second call a no-op.
    pub fn release_all(&mut self, factory: &dyn BlobRefFactory) -> usize {
        let released = self.urls.len();
        for url in self.urls.drain(..) {
            factory.release_ref(&url);
        }
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_shape() {
        let factory = DataUrlFactory::new();
        let url = factory.create_ref(&UploadedFile::new("a.png", "image/png", vec![1, 2, 3]));
        assert_eq!(url, "data:image/png;base64,AQID");
        assert_eq!(factory.live_refs(), 1);
    }

    #[test]
    fn test_undeclared_type_is_filled_in() {
        let factory = DataUrlFactory::new();
        let tiff = factory.create_ref(&UploadedFile::new("scan", "", b"II*\0".to_vec()));
        assert!(tiff.starts_with("data:image/tiff;base64,"), "{tiff}");

        let unknown = factory.create_ref(&UploadedFile::new("blob", "", vec![7, 7, 7]));
        assert!(unknown.starts_with("data:application/octet-stream;base64,"), "{unknown}");
    }

    #[test]
    fn test_duplicate_content_counts_twice() {
        let factory = DataUrlFactory::new();
        let file = UploadedFile::new("a.png", "image/png", vec![9]);
        let first = factory.create_ref(&file);
        let second = factory.create_ref(&file);
        assert_eq!(first, second);

        factory.release_ref(&first);
        assert_eq!(factory.live_refs(), 1);
        factory.release_ref(&second);
        assert_eq!(factory.live_refs(), 0);
    }

    #[test]
    fn test_registry_releases_once() {
        let factory = DataUrlFactory::new();
        let mut registry = UrlRegistry::new();
        registry.track(factory.create_ref(&UploadedFile::new("a.png", "image/png", vec![1])));
        registry.track(factory.create_ref(&UploadedFile::new("b.png", "image/png", vec![2])));

        assert_eq!(registry.release_all(&factory), 2);
        assert_eq!(registry.release_all(&factory), 0);
        assert_eq!(factory.live_refs(), 0);
    }
}
