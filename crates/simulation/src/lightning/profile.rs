use serde::{Deserialize, Serialize};

/// Tunables of the flash process: how often a flash may fire once the
/// frequency floor has elapsed, how bright it starts and how fast it fades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightningProfile {
    /// Bernoulli probability per eligible frame.
    pub flash_probability: f64,
    /// Lower bound of the starting flash intensity.
    pub min_intensity: f32,
    /// Upper bound of the starting flash intensity.
    pub max_intensity: f32,
    /// Per-frame multiplicative decay, in (0, 1).
    pub decay_rate: f32,
    /// Intensities below this snap to exactly zero.
    pub epsilon: f32,
}

impl LightningProfile {
    pub const CLASSIC: Self = Self {
        flash_probability: 0.02,
        min_intensity: 3.0,
        max_intensity: 8.0,
        decay_rate: 0.95,
        epsilon: 1e-3,
    };

    pub const DRAMATIC: Self = Self {
        flash_probability: 0.03,
        min_intensity: 20.0,
        max_intensity: 50.0,
        decay_rate: 0.82,
        epsilon: 1e-3,
    };

    /// Number of frames a flash of `intensity` takes to snap back to zero.
    pub fn frames_to_settle(&self, intensity: f32) -> u32 {
        if intensity < self.epsilon {
            return 0;
        }
        let frames = (self.epsilon / intensity).ln() / self.decay_rate.ln();
        frames.ceil().max(1.0) as u32
    }
}

/// Named flash presets selectable at runtime.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightningPreset {
    /// Frequent, moderate flashes with a slow fade.
    #[default]
    Classic,
    /// Rarer-feeling, very bright strikes that fade fast.
    Dramatic,
}

impl LightningPreset {
    pub const ALL: [LightningPreset; 2] = [LightningPreset::Classic, LightningPreset::Dramatic];

    pub fn profile(self) -> LightningProfile {
        match self {
            LightningPreset::Classic => LightningProfile::CLASSIC,
            LightningPreset::Dramatic => LightningProfile::DRAMATIC,
        }
    }

    /// Human-readable name for UI display.
    pub fn name(self) -> &'static str {
        match self {
            LightningPreset::Classic => "Classic",
            LightningPreset::Dramatic => "Dramatic",
        }
    }
}
