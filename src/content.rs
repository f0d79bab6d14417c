//! Copy and artwork for each mode.

use valentine_core::{Mode, UploadNotice};

/// Text shown on the card for one mode
#[derive(Debug)]
pub struct ContentCopy {
    pub brand: &'static str,
    pub switch_label: &'static str,
    pub upload_button: &'static str,
    pub hero_eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_lead: &'static str,
    pub hero_cta: &'static str,
    pub story_label: &'static str,
    pub story_heading: &'static str,
    pub story_text: &'static str,
    pub story_alt: &'static str,
    pub gallery_label: &'static str,
    pub gallery_heading: &'static str,
    pub memory_alt_prefix: &'static str,
    pub final_label: &'static str,
    pub final_heading: &'static str,
    pub final_text: &'static str,
    pub options: [&'static str; 4],
    pub answered_heading: &'static str,
    pub yes_answer: &'static str,
    pub all_failed: &'static str,
    pub partial_prefix: &'static str,
    pub hero_image: &'static str,
    pub story_image: &'static str,
    pub fallback_photos: [&'static str; 4],
    pub success_gif: &'static str,
}

/// Reward modal gif, primary mode only
pub const REWARD_GIF: &str = "reward.gif";

/// Horizontal offsets (percent) of the hearts floating over the hero
pub const FLOATING_HEART_OFFSETS: [u32; 8] = [8, 17, 29, 41, 58, 71, 84, 92];

static PRIMARY: ContentCopy = ContentCopy {
    brand: "You and Me",
    switch_label: "Cheeky version",
    upload_button: "Upload your photos",
    hero_eyebrow: "",
    hero_title: "Will you be my Valentine?",
    hero_lead: "You are the best thing that ever happened to me, and I can't imagine a day without you. I promise to be with you always.",
    hero_cta: "There's more below",
    story_label: "",
    story_heading: "I want to explore the whole world with you, and I can't wait.",
    story_text: "Every ordinary day turns into a good one when you are in it.",
    story_alt: "Romantic story preview",
    gallery_label: "Some of my favourite moments",
    gallery_heading: "I love you so much",
    memory_alt_prefix: "Memory",
    final_label: "\u{2764}\u{FE0F}\u{2764}\u{FE0F}\u{2764}\u{FE0F}",
    final_heading: "Will you be my Valentine?",
    final_text: "Pick any option you like",
    options: ["Yes", "Definitely yes", "Option B", "Option A"],
    answered_heading: "BEST. DAY. EVER!",
    yes_answer: "",
    all_failed: "Could not open the selected photos.",
    partial_prefix: "Some photos could not be opened:",
    hero_image: "hero.jpg",
    story_image: "story.jpg",
    fallback_photos: ["memory-1.jpg", "memory-2.jpg", "memory-3.jpg", "memory-4.jpg"],
    success_gif: "celebrate.gif",
};

static ALTERNATE: ContentCopy = ContentCopy {
    brand: "You and Me",
    switch_label: "Sweet version",
    upload_button: "Upload photos",
    hero_eyebrow: "",
    hero_title: "Hey you. Valentine, maybe?",
    hero_lead: "If the answer is no, that's fine. Totally fine. Not bothered at all.",
    hero_cta: "Press this, go on",
    story_label: "Exhibit A",
    story_heading: "Proof that I am very photogenic",
    story_text: "Prints available on request. Pricing is steep.",
    story_alt: "Cheeky story preview",
    gallery_label: "(guest appearance by a stock photo)",
    gallery_heading: "Nice pictures. Don't let it go to your head.",
    memory_alt_prefix: "Cheeky memory",
    final_label: "",
    final_heading: "Do you want to be my Valentine, I guess?",
    final_text: "Do we care? No. But in yellow.",
    options: ["Yes", "Definitely yes", "Option B", "Option A"],
    answered_heading: "Not surprised. Good for you.",
    yes_answer: "",
    all_failed: "Cheeky mode could not open those photos either.",
    partial_prefix: "Some cheeky photos could not be opened:",
    hero_image: "hero.jpg",
    story_image: "story-alt.jpg",
    fallback_photos: ["memory-alt-1.jpg", "memory-alt-2.jpg", "memory-alt-3.jpg", "memory-alt-4.jpg"],
    success_gif: "unbothered.gif",
};

/// Copy for `mode`
pub fn content_for(mode: Mode) -> &'static ContentCopy {
    match mode {
        Mode::Primary => &PRIMARY,
        Mode::Alternate => &ALTERNATE,
    }
}

impl ContentCopy {
    /// User-facing text for an upload notice
    pub fn notice_text(&self, notice: &UploadNotice) -> String {
        match notice {
            UploadNotice::AllFailed => self.all_failed.to_string(),
            UploadNotice::PartialFailed { names } => {
                format!("{} {}", self.partial_prefix, names.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_notice_lists_names_in_order() {
        let notice = UploadNotice::PartialFailed {
            names: vec!["a.heic".to_string(), "b.HEIF".to_string()],
        };
        assert_eq!(
            content_for(Mode::Primary).notice_text(&notice),
            "Some photos could not be opened: a.heic, b.HEIF"
        );
    }

    #[test]
    fn test_modes_have_distinct_copy() {
        let primary = content_for(Mode::Primary);
        let alternate = content_for(Mode::Alternate);
        assert_ne!(primary.answered_heading, alternate.answered_heading);
        assert_ne!(primary.success_gif, alternate.success_gif);
        assert_eq!(primary.options.len(), 4);
    }
}
