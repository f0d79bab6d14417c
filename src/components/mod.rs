//! Card sections and decorative layers

mod ask_panel;
mod celebration;
mod cursor_trail;
mod gallery;
mod hero;
mod photo_upload;
mod reward_modal;
mod story;

pub use ask_panel::AskPanel;
pub use celebration::{ConfettiLayer, HeartRainLayer};
pub use cursor_trail::CursorTrailLayer;
pub use gallery::GalleryPanel;
pub use hero::HeroPanel;
pub use photo_upload::PhotoUpload;
pub use reward_modal::RewardModal;
pub use story::StoryPanel;

/// Section class with the reveal animation state applied
pub(crate) fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("panel {} reveal is-visible", base)
    } else {
        format!("panel {} reveal", base)
    }
}
