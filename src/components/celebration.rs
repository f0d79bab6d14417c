//! Confetti burst and heart rain layers.
//!
//! Both read the session snapshot, which already hides confetti outside the
//! celebration window and heart rain for unanswered modes.

use dioxus::prelude::*;

use crate::context::use_session;

#[component]
pub fn ConfettiLayer() -> Element {
    let session = use_session();
    let state = session.read();
    let snapshot = state.snapshot();

    if snapshot.confetti.is_empty() {
        return rsx! {};
    }

    let pieces = snapshot.confetti.iter().map(|piece| {
        // Delay in the key restarts the animation when a burst replaces the batch
        let key = format!("{}-{}", piece.id, piece.delay);
        let class = format!("confetti-piece {}", piece.shape.class());
        let style = format!(
            "--x: {}vw; --y: {}vh; --rot: {}deg; width: {}px; height: {}px; \
             background-color: {}; animation-delay: {}ms; animation-duration: {}ms;",
            piece.x,
            piece.y,
            piece.rotation,
            piece.size,
            piece.height(),
            piece.color.hex(),
            piece.delay,
            piece.duration,
        );
        rsx! {
            span { key: "{key}", class: "{class}", style: "{style}" }
        }
    });

    rsx! {
        div { class: "confetti-layer", "aria-hidden": "true", {pieces} }
    }
}

#[component]
pub fn HeartRainLayer() -> Element {
    let session = use_session();
    let state = session.read();
    let snapshot = state.snapshot();

    if snapshot.heart_rain.is_empty() {
        return rsx! {};
    }

    let drops = snapshot.heart_rain.iter().map(|heart| {
        let id = heart.id;
        let style = format!(
            "--left: {}%; --size: {}px; --delay: {}ms; --duration: {}ms; --drift: {}vw; \
             color: hsl({} 92% 71%);",
            heart.left, heart.size, heart.delay, heart.duration, heart.drift, heart.hue
        );
        rsx! {
            span { key: "{id}", class: "heart-drop", style: "{style}", "\u{2665}" }
        }
    });

    rsx! {
        div { class: "heart-rain-layer", "aria-hidden": "true", {drops} }
    }
}
