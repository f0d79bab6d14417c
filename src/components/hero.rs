//! Hero panel: background art, floating hearts, mode switch and uploads.

use dioxus::prelude::*;

use super::PhotoUpload;
use crate::content::{content_for, FLOATING_HEART_OFFSETS};
use crate::context::{asset_url, use_session};

const SCROLL_TO_STORY: &str =
    r#"document.getElementById("story")?.scrollIntoView({ behavior: "smooth" });"#;

#[component]
pub fn HeroPanel() -> Element {
    let mut session = use_session();
    let state = session.read();
    let snapshot = state.snapshot();
    let copy = content_for(snapshot.mode);

    let background = snapshot
        .active_photo
        .map(|photo| photo.url.clone())
        .unwrap_or_else(|| asset_url(copy.hero_image));
    let hero_style = format!(
        "background-image: radial-gradient(circle at 18% 22%, rgba(255, 157, 146, 0.32), transparent 40%), url(\"{}\");",
        background
    );
    let notice = snapshot.notice.map(|notice| copy.notice_text(notice));

    let floating = FLOATING_HEART_OFFSETS.iter().enumerate().map(|(index, offset)| {
        let style = format!(
            "left: {}%; animation-delay: {:.2}s; animation-duration: {}s;",
            offset,
            index as f64 * 0.85,
            7 + index % 3
        );
        rsx! {
            span { key: "{offset}", class: "floating-heart", style: "{style}", "*" }
        }
    });

    let title_lines = copy.hero_title.lines().map(|line| {
        rsx! {
            span { class: "hero-title-line", "{line}" }
        }
    });

    rsx! {
        section { class: "panel hero-panel", style: "{hero_style}",
            div { class: "floating-hearts", "aria-hidden": "true", {floating} }

            header { class: "top-bar",
                p { class: "brand", "{copy.brand}" }
                div { class: "top-controls",
                    button {
                        class: "version-button is-active",
                        r#type: "button",
                        onclick: move |_| session.write().toggle_mode(),
                        "{copy.switch_label}"
                    }
                    div { class: "upload-group",
                        PhotoUpload { label: copy.upload_button.to_string() }
                        if let Some(text) = notice {
                            p { class: "upload-notice", "{text}" }
                        }
                    }
                }
            }

            div { class: "hero-content reveal is-visible",
                p { class: "hero-eyebrow", "{copy.hero_eyebrow}" }
                h1 { {title_lines} }
                p { class: "hero-lead", "{copy.hero_lead}" }
                div { class: "hero-actions",
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            document::eval(SCROLL_TO_STORY);
                        },
                        "{copy.hero_cta}"
                    }
                }
            }
        }
    }
}
