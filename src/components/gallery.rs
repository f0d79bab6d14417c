//! Gallery rail: uploaded photos, or the mode's bundled ones until the first
//! upload lands.

use dioxus::prelude::*;
use valentine_core::PhotoId;

use super::reveal_class;
use crate::content::content_for;
use crate::context::{asset_url, use_session};

#[component]
pub fn GalleryPanel() -> Element {
    let mut session = use_session();
    let state = session.read();
    let copy = content_for(state.mode());
    let class = reveal_class("gallery-panel", state.is_revealed("gallery"));

    let entries: Vec<(Option<PhotoId>, String)> = if state.photos().is_empty() {
        copy.fallback_photos
            .iter()
            .map(|name| (None, asset_url(name)))
            .collect()
    } else {
        state
            .photos()
            .iter()
            .map(|photo| (Some(photo.id), photo.url.clone()))
            .collect()
    };

    let cards = entries.into_iter().enumerate().map(|(index, (id, url))| {
        let key = id.map(|id| id.to_string()).unwrap_or_else(|| format!("fallback-{}", index));
        let delay = index * 120;
        let number = index + 1;
        rsx! {
            button {
                key: "{key}",
                r#type: "button",
                class: "memory-card",
                style: "animation-delay: {delay}ms;",
                onclick: move |_| {
                    if let Some(id) = id {
                        session.write().select_photo(id);
                    }
                },
                img { src: "{url}", alt: "{copy.memory_alt_prefix} {number}" }
            }
        }
    });

    rsx! {
        section { class: "{class}", "data-reveal-id": "gallery",
            div { class: "gallery-header",
                p { class: "section-label", "{copy.gallery_label}" }
                h2 { "{copy.gallery_heading}" }
            }
            div { class: "gallery-rail", {cards} }
        }
    }
}
