//! Core types for the valentine card

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for an uploaded photo
///
/// Uses ULID so ids minted in later upload batches never collide with
/// earlier ones for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhotoId(pub Ulid);

impl PhotoId {
    /// Create a new PhotoId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for PhotoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "photo_{}", self.0)
    }
}

/// An uploaded photo ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    /// File name after conversion (e.g. `IMG_1.jpg` for `IMG_1.HEIC`)
    pub name: String,
    /// Display reference, released at session teardown
    pub url: String,
}

/// Content/persona variant of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Primary,
    Alternate,
}

impl Mode {
    /// The other variant
    pub fn toggled(self) -> Self {
        match self {
            Mode::Primary => Mode::Alternate,
            Mode::Alternate => Mode::Primary,
        }
    }

    /// Whether answering in this mode opens the reward modal
    pub fn shows_reward(self) -> bool {
        matches!(self, Mode::Primary)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Primary => write!(f, "primary"),
            Mode::Alternate => write!(f, "alternate"),
        }
    }
}

/// Answer to the final question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    #[default]
    Unset,
    Yes,
}

impl Answer {
    pub fn is_yes(self) -> bool {
        matches!(self, Answer::Yes)
    }
}

/// Per-mode answers; each mode is answered independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeAnswers {
    primary: Answer,
    alternate: Answer,
}

impl ModeAnswers {
    pub fn get(&self, mode: Mode) -> Answer {
        match mode {
            Mode::Primary => self.primary,
            Mode::Alternate => self.alternate,
        }
    }

    /// Record a yes for `mode`. Returns true if this was the transition
    /// from unset.
    pub fn answer_yes(&mut self, mode: Mode) -> bool {
        let slot = match mode {
            Mode::Primary => &mut self.primary,
            Mode::Alternate => &mut self.alternate,
        };
        let changed = !slot.is_yes();
        *slot = Answer::Yes;
        changed
    }
}

/// The four offered choices. All of them mean yes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizOption {
    A,
    B,
    C,
    D,
}

impl QuizOption {
    pub const ALL: [QuizOption; 4] = [QuizOption::A, QuizOption::B, QuizOption::C, QuizOption::D];

    pub fn letter(self) -> &'static str {
        match self {
            QuizOption::A => "A",
            QuizOption::B => "B",
            QuizOption::C => "C",
            QuizOption::D => "D",
        }
    }
}

/// Where a click inside the reward overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardClick {
    /// Outside the dialog content
    Backdrop,
    /// The explicit close button
    CloseButton,
    /// Anywhere inside the dialog content
    Content,
}

/// Outcome notice for an upload batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploadNotice {
    /// Every file in the batch failed conversion
    AllFailed,
    /// Some files failed; names are in upload order
    PartialFailed { names: Vec<String> },
}

/// Confetti palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiColor {
    Coral,
    Peach,
    Butter,
    Mint,
    Sky,
    Orchid,
}

impl ConfettiColor {
    pub const PALETTE: [ConfettiColor; 6] = [
        ConfettiColor::Coral,
        ConfettiColor::Peach,
        ConfettiColor::Butter,
        ConfettiColor::Mint,
        ConfettiColor::Sky,
        ConfettiColor::Orchid,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            ConfettiColor::Coral => "#ff6f83",
            ConfettiColor::Peach => "#ffbf9b",
            ConfettiColor::Butter => "#ffd86f",
            ConfettiColor::Mint => "#9ff3d9",
            ConfettiColor::Sky => "#9ec8ff",
            ConfettiColor::Orchid => "#f8a4ff",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiShape {
    Rect,
    Circle,
}

impl ConfettiShape {
    pub fn class(self) -> &'static str {
        match self {
            ConfettiShape::Rect => "rect",
            ConfettiShape::Circle => "circle",
        }
    }
}

/// One piece of a celebration burst
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Index within its batch
    pub id: u32,
    /// Horizontal travel, viewport-width units
    pub x: f64,
    /// Vertical travel, viewport-height units
    pub y: f64,
    /// Degrees
    pub rotation: f64,
    /// Pixels
    pub size: f64,
    pub color: ConfettiColor,
    /// Milliseconds
    pub delay: f64,
    /// Milliseconds
    pub duration: f64,
    pub shape: ConfettiShape,
}

impl ConfettiPiece {
    /// Rendered height in pixels; rectangles are flattened strips.
    pub fn height(&self) -> f64 {
        match self.shape {
            ConfettiShape::Circle => self.size,
            ConfettiShape::Rect => (self.size * 0.58).max(6.0),
        }
    }
}

/// One falling heart of the heart rain
#[derive(Debug, Clone, PartialEq)]
pub struct HeartPiece {
    pub id: u32,
    /// Percent of the layer width
    pub left: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
    /// Sideways drift, viewport-width units
    pub drift: f64,
    pub hue: f64,
}

/// A short-lived heart left behind by the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct CursorHeart {
    /// Monotonic, never reused within a session
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub rotation: f64,
    pub hue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggle_is_involution() {
        assert_eq!(Mode::Primary.toggled(), Mode::Alternate);
        assert_eq!(Mode::Primary.toggled().toggled(), Mode::Primary);
    }

    #[test]
    fn test_answer_yes_transitions_once() {
        let mut answers = ModeAnswers::default();
        assert!(answers.answer_yes(Mode::Alternate));
        assert!(!answers.answer_yes(Mode::Alternate));
        assert_eq!(answers.get(Mode::Alternate), Answer::Yes);
        assert_eq!(answers.get(Mode::Primary), Answer::Unset);
    }

    #[test]
    fn test_upload_notice_is_tagged() {
        let json = serde_json::to_value(UploadNotice::PartialFailed {
            names: vec!["a.heic".to_string()],
        })
        .unwrap();
        assert_eq!(json["kind"], "partial_failed");
        assert_eq!(json["names"][0], "a.heic");

        let json = serde_json::to_value(UploadNotice::AllFailed).unwrap();
        assert_eq!(json["kind"], "all_failed");
    }

    #[test]
    fn test_confetti_rect_height_has_floor() {
        let piece = ConfettiPiece {
            id: 0,
            x: 0.0,
            y: 50.0,
            rotation: 0.0,
            size: 8.0,
            color: ConfettiColor::Mint,
            delay: 0.0,
            duration: 1500.0,
            shape: ConfettiShape::Rect,
        };
        assert_eq!(piece.height(), 6.0);
    }

    #[test]
    fn test_photo_id_display() {
        let id = PhotoId::new();
        assert_eq!(id.to_string(), format!("photo_{}", id.0));
        assert_ne!(id, PhotoId::new());
    }
}
