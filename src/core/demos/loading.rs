//! Retro loading bar.

use crate::config::LOADING_FRAMES;

/// Progress through [`LOADING_FRAMES`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingBar {
    next_frame: usize,
}

impl LoadingBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next frame to print, or `None` once every frame has been shown.
    pub fn tick(&mut self) -> Option<&'static str> {
        let frame = LOADING_FRAMES.get(self.next_frame).copied()?;
        self.next_frame += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_then_done() {
        let mut bar = LoadingBar::new();
        let frames: Vec<_> = std::iter::from_fn(|| bar.tick()).collect();
        assert_eq!(frames, LOADING_FRAMES);
        assert!(bar.tick().is_none());
    }
}
