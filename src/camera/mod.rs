//! Simulated camera feed
//!
//! The camera is an opaque collaborator: the app asks for a permission
//! signal and a stream of preview frames, and never interprets frame
//! contents. Frames here are synthetic static so the session screen has
//! something to draw; no pose or rep detection happens anywhere.

use crate::config::AppConfig;
use crate::{RepsetError, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

const NOISE_GLYPHS: [char; 6] = [' ', ' ', '.', ':', '+', '*'];

/// Live preview source, held for the lifetime of the session view
#[derive(Debug)]
pub struct CameraFeed {
    rng: SmallRng,
    frame_count: u64,
}

impl CameraFeed {
    /// Acquire the camera, checking the permission signal first
    ///
    /// Denial is an expected state, not a crash: the caller keeps the
    /// session going and shows the permission fallback instead.
    pub fn open(config: &AppConfig) -> Result<Self> {
        if !config.camera_permission {
            warn!("camera permission not granted, session will show fallback");
            return Err(RepsetError::PermissionDenied(
                "camera access not granted".to_string(),
            ));
        }

        debug!("camera feed acquired");
        Ok(Self {
            rng: SmallRng::from_entropy(),
            frame_count: 0,
        })
    }

    /// Acquire a feed with a fixed seed, for deterministic frames
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            frame_count: 0,
        }
    }

    /// Number of frames produced so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Produce the next preview frame as rows of glyphs
    ///
    /// A sweeping scanline moves down the frame to make the preview read
    /// as live rather than frozen.
    pub fn next_frame(&mut self, width: u16, height: u16) -> Vec<String> {
        let width = width as usize;
        let height = height as usize;
        let scanline = if height > 0 {
            (self.frame_count as usize) % height
        } else {
            0
        };
        self.frame_count += 1;

        (0..height)
            .map(|row| {
                if row == scanline {
                    "─".repeat(width)
                } else {
                    (0..width)
                        .map(|_| NOISE_GLYPHS[self.rng.gen_range(0..NOISE_GLYPHS.len())])
                        .collect()
                }
            })
            .collect()
    }
}

impl Drop for CameraFeed {
    fn drop(&mut self) {
        debug!(frames = self.frame_count, "camera feed released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_honors_permission_signal() {
        let granted = AppConfig::default().with_camera_permission(true);
        assert!(CameraFeed::open(&granted).is_ok());

        let denied = AppConfig::default().with_camera_permission(false);
        match CameraFeed::open(&denied) {
            Err(RepsetError::PermissionDenied(_)) => {}
            other => panic!("expected permission denial, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_frames_have_requested_shape() {
        let mut feed = CameraFeed::with_seed(7);
        let frame = feed.next_frame(20, 5);

        assert_eq!(frame.len(), 5);
        assert!(frame
            .iter()
            .all(|row| row.chars().count() == 20));
    }

    #[test]
    fn test_scanline_sweeps_down() {
        let mut feed = CameraFeed::with_seed(7);

        for expected_row in 0..4 {
            let frame = feed.next_frame(8, 4);
            let scanline = frame
                .iter()
                .position(|row| row.chars().all(|c| c == '─'))
                .expect("every frame carries a scanline");
            assert_eq!(scanline, expected_row);
        }
    }

    #[test]
    fn test_zero_sized_frame_is_safe() {
        let mut feed = CameraFeed::with_seed(1);
        assert!(feed.next_frame(0, 0).is_empty());
    }
}
