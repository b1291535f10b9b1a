//! Fade color ramp
//!
//! A fixed 256-entry lookup table maps the fade scalar to RGBA: pure red
//! with opacity ramping linearly from transparent to opaque. Entry 255 is
//! left at the table's default entry.

use pointersim_core::Rgba;

/// Scene name of the pointer's color table entity
pub const COLOR_TABLE_NAME: &str = "CustomColorTable";

/// Number of entries in the lookup table
pub const RAMP_SIZE: usize = 256;

// Keeps the first entry marginally above fully transparent.
const RAMP_EPSILON: f64 = 1e-16;

/// Immutable 256-entry color lookup table
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    entries: Vec<Rgba>,
}

impl ColorRamp {
    /// Value of table slots that are never written
    pub const DEFAULT_ENTRY: Rgba = Rgba::BLACK;

    /// Build the ramp: entries 0..=254 are pure red with alpha
    /// `(i + eps) / 255`; the last slot keeps the default entry.
    pub fn build() -> Self {
        let mut entries = vec![Self::DEFAULT_ENTRY; RAMP_SIZE];
        for (i, entry) in entries.iter_mut().take(RAMP_SIZE - 1).enumerate() {
            *entry = Rgba::new(1.0, 0.0, 0.0, (i as f64 + RAMP_EPSILON) / 255.0);
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Rgba {
        self.entries[index]
    }

    pub fn entries(&self) -> &[Rgba] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Rgba> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ramp_size() {
        let ramp = ColorRamp::build();
        assert_eq!(ramp.len(), RAMP_SIZE);
    }

    #[test]
    fn test_opacity_ramps_up() {
        let ramp = ColorRamp::build();

        assert!(ramp.entry(0).a > 0.0, "first entry must not be fully transparent");
        assert!(ramp.entry(0).a < 1e-10);
        assert_relative_eq!(ramp.entry(254).a, 254.0 / 255.0, epsilon = 1e-12);

        for i in 1..RAMP_SIZE - 1 {
            assert!(
                ramp.entry(i).a > ramp.entry(i - 1).a,
                "opacity must increase at entry {i}"
            );
        }
    }

    #[test]
    fn test_color_is_pure_red() {
        let ramp = ColorRamp::build();
        for i in 0..RAMP_SIZE - 1 {
            let c = ramp.entry(i);
            assert_eq!((c.r, c.g, c.b), (1.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_last_entry_keeps_default() {
        let ramp = ColorRamp::build();
        assert_eq!(ramp.entry(RAMP_SIZE - 1), ColorRamp::DEFAULT_ENTRY);
    }
}
