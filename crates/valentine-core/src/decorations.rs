//! Randomized descriptors for decorative particles.
//!
//! Every field is drawn independently and uniformly from its range. Nothing
//! here is deterministic; tests check ranges, never literal values.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::{ConfettiColor, ConfettiPiece, ConfettiShape, CursorHeart, HeartPiece};

pub const CONFETTI_X: RangeInclusive<f64> = -70.0..=70.0;
pub const CONFETTI_Y: RangeInclusive<f64> = 45.0..=115.0;
pub const CONFETTI_ROTATION: RangeInclusive<f64> = -750.0..=750.0;
pub const CONFETTI_SIZE: RangeInclusive<f64> = 7.0..=17.0;
pub const CONFETTI_DELAY_MS: RangeInclusive<f64> = 0.0..=180.0;
pub const CONFETTI_DURATION_MS: RangeInclusive<f64> = 1200.0..=2050.0;

pub const HEART_LEFT: RangeInclusive<f64> = 0.0..=100.0;
pub const HEART_SIZE: RangeInclusive<f64> = 14.0..=40.0;
pub const HEART_DELAY_MS: RangeInclusive<f64> = 0.0..=1800.0;
pub const HEART_DURATION_MS: RangeInclusive<f64> = 3600.0..=6600.0;
pub const HEART_DRIFT: RangeInclusive<f64> = -11.0..=11.0;
pub const HEART_HUE: RangeInclusive<f64> = 330.0..=365.0;

pub const CURSOR_HEART_SIZE: RangeInclusive<f64> = 14.0..=28.0;
pub const CURSOR_HEART_ROTATION: RangeInclusive<f64> = -17.0..=17.0;
pub const CURSOR_HEART_HUE: RangeInclusive<f64> = 326.0..=362.0;

/// Generate a confetti batch of exactly `count` pieces, ids `0..count`.
pub fn generate_confetti(count: usize) -> Vec<ConfettiPiece> {
    generate_confetti_with(&mut rand::rng(), count)
}

/// Same as [`generate_confetti`] with a caller-supplied randomness source.
pub fn generate_confetti_with<R: Rng>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|index| ConfettiPiece {
            id: index as u32,
            x: rng.random_range(CONFETTI_X),
            y: rng.random_range(CONFETTI_Y),
            rotation: rng.random_range(CONFETTI_ROTATION),
            size: rng.random_range(CONFETTI_SIZE),
            color: ConfettiColor::PALETTE[rng.random_range(0..ConfettiColor::PALETTE.len())],
            delay: rng.random_range(CONFETTI_DELAY_MS),
            duration: rng.random_range(CONFETTI_DURATION_MS),
            shape: if rng.random_bool(0.5) {
                ConfettiShape::Rect
            } else {
                ConfettiShape::Circle
            },
        })
        .collect()
}

/// Generate a heart-rain batch of exactly `count` pieces, ids `0..count`.
pub fn generate_hearts(count: usize) -> Vec<HeartPiece> {
    generate_hearts_with(&mut rand::rng(), count)
}

pub fn generate_hearts_with<R: Rng>(rng: &mut R, count: usize) -> Vec<HeartPiece> {
    (0..count)
        .map(|index| HeartPiece {
            id: index as u32,
            left: rng.random_range(HEART_LEFT),
            size: rng.random_range(HEART_SIZE),
            delay: rng.random_range(HEART_DELAY_MS),
            duration: rng.random_range(HEART_DURATION_MS),
            drift: rng.random_range(HEART_DRIFT),
            hue: rng.random_range(HEART_HUE),
        })
        .collect()
}

/// A cursor heart at the pointer position. The caller assigns the id.
pub fn cursor_heart_with<R: Rng>(rng: &mut R, id: u64, x: f64, y: f64) -> CursorHeart {
    CursorHeart {
        id,
        x,
        y,
        size: rng.random_range(CURSOR_HEART_SIZE),
        rotation: rng.random_range(CURSOR_HEART_ROTATION),
        hue: rng.random_range(CURSOR_HEART_HUE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_batch_size_and_ids() {
        let pieces = generate_confetti(90);
        assert_eq!(pieces.len(), 90);
        for (i, piece) in pieces.iter().enumerate() {
            assert_eq!(piece.id as usize, i);
        }
    }

    #[test]
    fn test_empty_batches() {
        assert!(generate_confetti(0).is_empty());
        assert!(generate_hearts(0).is_empty());
    }

    #[test]
    fn test_confetti_uses_both_shapes() {
        // 2^-200 chance of a false failure
        let pieces = generate_confetti(200);
        assert!(pieces.iter().any(|p| p.shape == ConfettiShape::Rect));
        assert!(pieces.iter().any(|p| p.shape == ConfettiShape::Circle));
    }

    #[test]
    fn test_cursor_heart_keeps_position() {
        let heart = cursor_heart_with(&mut rand::rng(), 7, 120.5, 33.0);
        assert_eq!(heart.id, 7);
        assert_eq!((heart.x, heart.y), (120.5, 33.0));
        assert!(CURSOR_HEART_SIZE.contains(&heart.size));
        assert!(CURSOR_HEART_ROTATION.contains(&heart.rotation));
        assert!(CURSOR_HEART_HUE.contains(&heart.hue));
    }
}
