//! Cosmetic hue rotation of the terminal text color.

use crate::config::timing::HUE_STEP;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorCycle {
    hue: u16,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.hue = (self.hue + HUE_STEP) % 360;
    }

    pub fn css_color(&self) -> String {
        format!("hsl({}, 90%, 60%)", self.hue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_wraps() {
        let mut cycle = ColorCycle::new();
        for _ in 0..(360 / HUE_STEP) {
            cycle.tick();
        }
        assert_eq!(cycle.hue, 0);
        cycle.tick();
        assert_eq!(cycle.css_color(), format!("hsl({}, 90%, 60%)", HUE_STEP));
    }
}
