//! The card session: every piece of state the page renders from.
//!
//! ```text
//!                 select_option                 2300ms, no new burst
//!   Unanswered ──────────────────► Answered ──────────────────────► Answered
//!                                (celebrating)                   (settled)
//!                                     ▲                               │
//!                                     └──────── select_option ────────┘
//! ```
//!
//! Each mode walks this machine independently; `Answered` is terminal for
//! the session. Mutations are plain methods taking `now` where time matters,
//! so the session never reads a clock and never blocks.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use crate::ingest::{
    BlobRefFactory, FormatConverter, IngestOutcome, IngestionPipeline, PreparedBatch,
    UploadedFile, UrlRegistry,
};
use crate::particles::ParticleStore;
use crate::types::{
    Answer, ConfettiPiece, HeartPiece, Mode, ModeAnswers, Photo, PhotoId, QuizOption,
    RewardClick, UploadNotice,
};

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, Copy)]
pub struct CardSnapshot<'a> {
    pub mode: Mode,
    pub answer: Answer,
    pub celebrating: bool,
    pub show_reward: bool,
    /// Empty unless a celebration is running
    pub confetti: &'a [ConfettiPiece],
    /// Empty unless the current mode has answered yes
    pub heart_rain: &'a [HeartPiece],
    pub photos: &'a [Photo],
    pub active_photo: Option<&'a Photo>,
    pub notice: Option<&'a UploadNotice>,
    pub revealed: &'a BTreeSet<String>,
}

/// State container owned by the page for its whole lifetime
pub struct CardSession {
    mode: Mode,
    answers: ModeAnswers,
    show_reward: bool,
    photos: Vec<Photo>,
    active_photo: Option<PhotoId>,
    notice: Option<UploadNotice>,
    revealed: BTreeSet<String>,
    particles: ParticleStore,
    urls: UrlRegistry,
    factory: Arc<dyn BlobRefFactory>,
}

impl CardSession {
    pub fn new(factory: Arc<dyn BlobRefFactory>) -> Self {
        Self {
            mode: Mode::default(),
            answers: ModeAnswers::default(),
            show_reward: false,
            photos: Vec::new(),
            active_photo: None,
            notice: None,
            revealed: BTreeSet::new(),
            particles: ParticleStore::new(),
            urls: UrlRegistry::new(),
            factory,
        }
    }

    /// Start in `mode` instead of the primary one
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    // ------------------------------------------------------------------
    // Mode and answers
    // ------------------------------------------------------------------

    /// Flip between the two variants. Answers, photos and particles are
    /// left untouched.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        tracing::info!(mode = %self.mode, "Mode toggled");
    }

    /// Every option means yes. The first selection per mode starts the heart
    /// rain; every selection restarts the confetti burst.
    pub fn select_option(&mut self, option: QuizOption, now: Instant) {
        let first_yes = self.answers.answer_yes(self.mode);
        if first_yes {
            self.particles.rain_hearts();
            tracing::info!(mode = %self.mode, option = option.letter(), "Answered yes");
        }

        self.particles.start_celebration_burst(now);
        self.show_reward = self.mode.shows_reward();
    }

    pub fn dismiss_reward(&mut self) {
        self.show_reward = false;
    }

    /// Clicks inside the dialog content do not dismiss it.
    pub fn reward_clicked(&mut self, target: RewardClick) {
        match target {
            RewardClick::Backdrop | RewardClick::CloseButton => self.dismiss_reward(),
            RewardClick::Content => {}
        }
    }

    // ------------------------------------------------------------------
    // Particles
    // ------------------------------------------------------------------

    /// Fire due timers (the celebration clear)
    pub fn tick(&mut self, now: Instant) -> usize {
        self.particles.tick(now)
    }

    pub fn has_due(&self, now: Instant) -> bool {
        self.particles.has_due(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.particles.next_deadline()
    }

    // ------------------------------------------------------------------
    // Photos
    // ------------------------------------------------------------------

    /// Clear the previous batch's notice before a new upload starts.
    pub fn begin_upload(&mut self) {
        self.notice = None;
    }

    /// Mint photos for a converted batch and fold them into the gallery.
    pub fn apply_batch(&mut self, batch: PreparedBatch) -> IngestOutcome {
        if batch.prepared.is_empty() && batch.failed.is_empty() {
            return IngestOutcome {
                accepted: Vec::new(),
                notice: None,
            };
        }

        let outcome = batch.finish(self.factory.as_ref(), &mut self.urls);
        self.apply_outcome(&outcome);
        outcome
    }

    /// Full upload in one call. Holds the session across the conversion
    /// await, so concurrent batches are serialized by the borrow.
    pub async fn ingest<C: FormatConverter>(
        &mut self,
        pipeline: &IngestionPipeline<C>,
        files: Vec<UploadedFile>,
    ) -> IngestOutcome {
        if files.is_empty() {
            return IngestOutcome {
                accepted: Vec::new(),
                notice: None,
            };
        }

        self.begin_upload();
        let batch = pipeline.prepare(files).await;
        self.apply_batch(batch)
    }

    fn apply_outcome(&mut self, outcome: &IngestOutcome) {
        self.notice = outcome.notice.clone();
        if outcome.accepted.is_empty() {
            return;
        }

        let mut photos = outcome.accepted.clone();
        photos.append(&mut self.photos);
        self.photos = photos;

        if self.active_photo.is_none() {
            self.active_photo = self.photos.first().map(|photo| photo.id);
        }
    }

    /// Make an existing photo the hero background. Unknown ids are ignored.
    pub fn select_photo(&mut self, id: PhotoId) -> bool {
        if self.photos.iter().any(|photo| photo.id == id) {
            self.active_photo = Some(id);
            true
        } else {
            false
        }
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Returns true the first time `name` is revealed.
    pub fn reveal_section(&mut self, name: impl Into<String>) -> bool {
        self.revealed.insert(name.into())
    }

    pub fn is_revealed(&self, name: &str) -> bool {
        self.revealed.contains(name)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Answer for the current mode
    pub fn answer(&self) -> Answer {
        self.answers.get(self.mode)
    }

    pub fn answer_for(&self, mode: Mode) -> Answer {
        self.answers.get(mode)
    }

    pub fn celebrating(&self) -> bool {
        self.particles.celebrating()
    }

    /// Reward modal visibility; never shown outside the primary mode.
    pub fn show_reward(&self) -> bool {
        self.show_reward && self.mode.shows_reward()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn active_photo(&self) -> Option<&Photo> {
        let id = self.active_photo?;
        self.photos.iter().find(|photo| photo.id == id)
    }

    pub fn notice(&self) -> Option<&UploadNotice> {
        self.notice.as_ref()
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    /// Urls handed out and not yet released
    pub fn tracked_urls(&self) -> usize {
        self.urls.len()
    }

    pub fn snapshot(&self) -> CardSnapshot<'_> {
        let answer = self.answer();
        CardSnapshot {
            mode: self.mode,
            answer,
            celebrating: self.celebrating(),
            show_reward: self.show_reward(),
            confetti: if self.celebrating() {
                self.particles.confetti().pieces()
            } else {
                &[]
            },
            heart_rain: if answer.is_yes() {
                self.particles.heart_rain().pieces()
            } else {
                &[]
            },
            photos: &self.photos,
            active_photo: self.active_photo(),
            notice: self.notice.as_ref(),
            revealed: &self.revealed,
        }
    }

    /// Release every display url and drop pending timers. Safe to call
    /// more than once; only the first call releases anything.
    pub fn teardown(&mut self) -> usize {
        self.particles.teardown();
        let released = self.urls.release_all(self.factory.as_ref());
        if released > 0 {
            tracing::debug!(released, "Released display urls");
        }
        released
    }
}

impl Drop for CardSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for CardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardSession")
            .field("mode", &self.mode)
            .field("answers", &self.answers)
            .field("show_reward", &self.show_reward)
            .field("photos", &self.photos.len())
            .field("active_photo", &self.active_photo)
            .field("notice", &self.notice)
            .field("celebrating", &self.celebrating())
            .finish()
    }
}
