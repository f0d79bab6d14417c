//! Reward Modal Component
//!
//! Shown after a yes in the primary mode. Clicking the backdrop or the close
//! button dismisses it; clicks inside the dialog do not.

use dioxus::prelude::*;
use valentine_core::RewardClick;

use crate::content::REWARD_GIF;
use crate::context::{asset_url, use_session};

#[component]
pub fn RewardModal() -> Element {
    let mut session = use_session();

    if !session.read().show_reward() {
        return rsx! {};
    }

    let gif = asset_url(REWARD_GIF);

    rsx! {
        div {
            class: "reward-overlay",
            onclick: move |_| session.write().reward_clicked(RewardClick::Backdrop),

            div {
                class: "reward-dialog",
                // Content clicks never dismiss; only keep them off the backdrop
                onclick: move |e| e.stop_propagation(),

                img { src: "{gif}", alt: "Reward celebration" }
                button {
                    class: "reward-close",
                    r#type: "button",
                    onclick: move |e| {
                        e.stop_propagation();
                        session.write().reward_clicked(RewardClick::CloseButton);
                    },
                    "Close"
                }
            }
        }
    }
}
