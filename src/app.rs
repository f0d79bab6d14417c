use std::sync::Arc;
use std::time::{Duration, Instant};

use dioxus::prelude::*;
use valentine_core::{CardSession, CursorTrail, DataUrlFactory, IngestionPipeline, JpegConverter};

use crate::components::{AskPanel, CursorTrailLayer, GalleryPanel, HeroPanel, StoryPanel};
use crate::context::{start_mode, SharedPipeline};
use crate::theme::GLOBAL_STYLES;

/// Longest the timer loop sleeps before re-checking the session
const TIMER_POLL: Duration = Duration::from_millis(100);

/// Reports each `data-reveal-id` section once it scrolls a quarter into view
const REVEAL_OBSERVER: &str = r#"
const observer = new IntersectionObserver((entries) => {
  for (const entry of entries) {
    const id = entry.target.dataset.revealId;
    if (entry.isIntersecting && id) {
      dioxus.send(id);
      observer.unobserve(entry.target);
    }
  }
}, { threshold: 0.24 });
document.querySelectorAll("[data-reveal-id]").forEach((node) => observer.observe(node));
"#;

/// Root application component.
///
/// Provides global styles, the session, cursor trail and upload pipeline
/// contexts, and drives their timers.
///
/// The cursor trail lives in its own signal: pointer moves and heart expiry
/// only re-render the trail layer, never the sections holding photo urls.
#[component]
pub fn App() -> Element {
    let mut session: Signal<CardSession> = use_signal(|| {
        CardSession::new(Arc::new(DataUrlFactory::new())).with_mode(start_mode())
    });
    let mut trail: Signal<CursorTrail> = use_signal(CursorTrail::new);

    use_context_provider(|| session);
    use_context_provider(|| trail);
    use_context_provider::<SharedPipeline>(|| {
        Arc::new(IngestionPipeline::new(JpegConverter::default()))
    });

    // Fire celebration clears and cursor heart expiry as they come due
    use_future(move || async move {
        loop {
            let next = [session.peek().next_deadline(), trail.peek().next_deadline()]
                .into_iter()
                .flatten()
                .min();
            let wait = next
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(TIMER_POLL)
                .min(TIMER_POLL);
            tokio::time::sleep(wait).await;

            let now = Instant::now();
            if session.peek().has_due(now) {
                session.write().tick(now);
            }
            if trail.peek().has_due(now) {
                trail.write().tick(now);
            }
        }
    });

    // Scroll reveal: sections are mounted once the first render lands
    use_effect(move || {
        spawn(async move {
            let mut observer = document::eval(REVEAL_OBSERVER);
            loop {
                match observer.recv::<String>().await {
                    Ok(section) => {
                        if session.write().reveal_section(section.clone()) {
                            tracing::debug!("Section revealed: {}", section);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Reveal observer stopped: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    let on_pointer_move = move |evt: MouseEvent| {
        let now = Instant::now();
        // Skip the signal write (and re-render) for throttled moves
        if !trail.peek().accepts(now) {
            return;
        }
        let point = evt.client_coordinates();
        trail.write().spawn(point.x, point.y, now);
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page", onmousemove: on_pointer_move,
            CursorTrailLayer {}
            HeroPanel {}
            StoryPanel {}
            GalleryPanel {}
            AskPanel {}
        }
    }
}
