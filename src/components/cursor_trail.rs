//! Hearts that trail the pointer.

use dioxus::prelude::*;

use crate::context::use_cursor_trail;

#[component]
pub fn CursorTrailLayer() -> Element {
    let trail = use_cursor_trail();
    let state = trail.read();

    let hearts = state.hearts().iter().map(|heart| {
        let id = heart.id;
        let style = format!(
            "left: {}px; top: {}px; --size: {}px; --rot: {}deg; --hue: {};",
            heart.x, heart.y, heart.size, heart.rotation, heart.hue
        );
        rsx! {
            span { key: "{id}", class: "cursor-heart", style: "{style}", "\u{2665}" }
        }
    });

    rsx! {
        div { class: "cursor-heart-layer", "aria-hidden": "true", {hearts} }
    }
}
