//! The final question.
//!
//! Every option answers yes. Answering sets off the confetti burst, starts
//! the heart rain and, in the primary mode, opens the reward modal.

use std::time::Instant;

use dioxus::prelude::*;
use valentine_core::QuizOption;

use super::{reveal_class, ConfettiLayer, HeartRainLayer, RewardModal};
use crate::content::content_for;
use crate::context::{asset_url, use_session};

#[component]
pub fn AskPanel() -> Element {
    let mut session = use_session();
    let state = session.read();
    let snapshot = state.snapshot();
    let copy = content_for(snapshot.mode);
    let answered = snapshot.answer.is_yes();
    let class = reveal_class("ask-panel", snapshot.revealed.contains("ask"));
    let card_class = if snapshot.celebrating {
        "ask-card is-celebrating"
    } else {
        "ask-card"
    };

    let heading = if answered {
        copy.answered_heading
    } else {
        copy.final_heading
    };
    let text = if answered { "" } else { copy.final_text };
    let success_gif = asset_url(copy.success_gif);

    let options = QuizOption::ALL.into_iter().zip(copy.options).map(|(option, label)| {
        let letter = option.letter();
        rsx! {
            button {
                key: "{letter}",
                r#type: "button",
                class: "quiz-option",
                onclick: move |_| session.write().select_option(option, Instant::now()),
                span { class: "quiz-letter", "{letter}" }
                span { class: "quiz-text", "{label}" }
            }
        }
    });

    rsx! {
        section { class: "{class}", "data-reveal-id": "ask",
            ConfettiLayer {}
            HeartRainLayer {}
            RewardModal {}

            div { class: "{card_class}",
                p { class: "section-label", "{copy.final_label}" }
                h2 { "{heading}" }
                p { "{text}" }
                if answered {
                    div { class: "success-gif-wrap",
                        img { class: "success-gif", src: "{success_gif}", alt: "Celebration" }
                    }
                    p { class: "answer answer-yes", "{copy.yes_answer}" }
                } else {
                    div { class: "quiz-options", {options} }
                }
            }
        }
    }
}
