//! Sweep parameters and the built-in effect presets.
//!
//! Parameter files are JSON objects with camelCase keys. Every key is
//! optional; missing keys fall back to the jump sound's values:
//!
//! ```json
//! { "duration": 0.5, "startFreq": 150, "endFreq": 0.01, "startGain": 0.8 }
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dsp::oscillator::Waveform;
use crate::error::{ParamError, SfxError};

pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Most samples a 16-bit mono WAV can declare: the RIFF size field
/// (`36 + data bytes`) must fit in a u32.
pub const MAX_SAMPLES: usize = ((u32::MAX - 36) / 2) as usize;

/// Immutable description of one swept tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SweepParameters {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Length of the effect in seconds.
    pub duration: f64,
    /// Oscillator frequency at the first sample, in Hz.
    pub start_freq: f64,
    /// Frequency the sweep approaches at the end, in Hz.
    pub end_freq: f64,
    pub start_gain: f64,
    pub end_gain: f64,
    pub waveform: Waveform,
}

impl Default for SweepParameters {
    fn default() -> Self {
        SweepParameters {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: 0.15,
            start_freq: 600.0,
            end_freq: 900.0,
            start_gain: 0.5,
            end_gain: 0.01,
            waveform: Waveform::Sine,
        }
    }
}

impl SweepParameters {
    /// Number of samples the sweep renders to: `floor(sample_rate × duration)`.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration) as usize
    }

    /// Check the constraints generation relies on. Frequencies must be
    /// strictly positive since the sweep raises their ratio to a fractional
    /// power.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.sample_rate == 0 {
            return Err(ParamError::SampleRate { value: self.sample_rate });
        }
        if !(self.duration.is_finite() && self.duration > 0.0)
            || (self.sample_rate as f64 * self.duration).floor() > MAX_SAMPLES as f64
        {
            return Err(ParamError::Duration { value: self.duration });
        }
        for (field, value) in [("startFreq", self.start_freq), ("endFreq", self.end_freq)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamError::Frequency { field, value });
            }
        }
        for (field, value) in [("startGain", self.start_gain), ("endGain", self.end_gain)] {
            if !value.is_finite() {
                return Err(ParamError::Gain { field, value, reason: "must be finite" });
            }
        }
        // The gain ramp is start × (end/start)^p: a zero endpoint is only
        // defined when both are zero, and the ratio must not be negative.
        let (start, end) = (self.start_gain, self.end_gain);
        if start == 0.0 && end != 0.0 {
            return Err(ParamError::Gain {
                field: "startGain",
                value: start,
                reason: "can only be 0 when endGain is also 0",
            });
        }
        if end == 0.0 && start != 0.0 {
            return Err(ParamError::Gain {
                field: "endGain",
                value: end,
                reason: "can only be 0 when startGain is also 0",
            });
        }
        if start * end < 0.0 {
            return Err(ParamError::Gain {
                field: "endGain",
                value: end,
                reason: "must have the same sign as startGain",
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON parameter object.
    pub fn from_json(source: &str) -> Result<Self, SfxError> {
        let params: SweepParameters = serde_json::from_str(source)?;
        params.validate()?;
        Ok(params)
    }

    /// Parse a JSON parameter object, filling missing keys from `base`
    /// instead of the jump defaults.
    pub fn from_json_over(base: &SweepParameters, source: &str) -> Result<Self, SfxError> {
        let mut merged = serde_json::to_value(base)?;
        let overrides: serde_json::Map<String, serde_json::Value> = serde_json::from_str(source)?;
        if let Some(target) = merged.as_object_mut() {
            target.extend(overrides);
        }
        let params: SweepParameters = serde_json::from_value(merged)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SfxError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}

/// Built-in sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SfxPreset {
    /// Rising sine chirp, 600 → 900 Hz.
    #[default]
    Jump,
    /// Sine dropping from 150 Hz towards silence.
    Kick,
    /// Short steady triangle tick.
    Rhythm,
    /// Falling sawtooth buzz.
    Hit,
}

impl SfxPreset {
    pub const ALL: [SfxPreset; 4] = [SfxPreset::Jump, SfxPreset::Kick, SfxPreset::Rhythm, SfxPreset::Hit];

    pub fn name(&self) -> &'static str {
        match self {
            SfxPreset::Jump => "jump",
            SfxPreset::Kick => "kick",
            SfxPreset::Rhythm => "rhythm",
            SfxPreset::Hit => "hit",
        }
    }

    pub fn params(&self) -> SweepParameters {
        let base = SweepParameters::default();
        match self {
            SfxPreset::Jump => base,
            SfxPreset::Kick => SweepParameters {
                duration: 0.5,
                start_freq: 150.0,
                end_freq: 0.01,
                start_gain: 0.8,
                end_gain: 0.01,
                ..base
            },
            SfxPreset::Rhythm => SweepParameters {
                duration: 0.05,
                start_freq: 800.0,
                end_freq: 800.0,
                start_gain: 0.1,
                end_gain: 0.01,
                waveform: Waveform::Triangle,
                ..base
            },
            SfxPreset::Hit => SweepParameters {
                duration: 0.2,
                start_freq: 100.0,
                end_freq: 50.0,
                start_gain: 0.5,
                end_gain: 0.01,
                waveform: Waveform::Sawtooth,
                ..base
            },
        }
    }
}

impl FromStr for SfxPreset {
    type Err = SfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SfxPreset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SfxError::UnknownPreset(s.to_string()))
    }
}
