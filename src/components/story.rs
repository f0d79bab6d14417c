use dioxus::prelude::*;

use super::reveal_class;
use crate::content::content_for;
use crate::context::{asset_url, use_session};

#[component]
pub fn StoryPanel() -> Element {
    let session = use_session();
    let state = session.read();
    let copy = content_for(state.mode());
    let class = reveal_class("story-panel", state.is_revealed("story"));
    let image = asset_url(copy.story_image);

    rsx! {
        section { id: "story", class: "{class}", "data-reveal-id": "story",
            div { class: "story-text",
                p { class: "section-label", "{copy.story_label}" }
                h2 { "{copy.story_heading}" }
                p { "{copy.story_text}" }
            }
            div { class: "story-image-frame",
                img { src: "{image}", alt: "{copy.story_alt}" }
            }
        }
    }
}
