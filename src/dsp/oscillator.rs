//! Phase-accumulating sweep oscillator.
//!
//! Frequency may change on every sample; the phase is advanced by
//! forward-Euler integration (`phase += 2π·f/sr`) rather than a closed-form
//! integral of the sweep, which keeps the rendered jump sound bit-identical
//! across ports.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Supported waveform shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Triangle => "triangle",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SweepOscillator {
    pub waveform: Waveform,
    /// Accumulated phase in radians. Never wrapped.
    phase: f64,
    sample_rate: f64,
}

impl SweepOscillator {
    pub fn new(waveform: Waveform, sample_rate: f64) -> Self {
        SweepOscillator {
            waveform,
            phase: 0.0,
            sample_rate,
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance the phase by one sample at `frequency` Hz, then return the
    /// waveform value at the new phase.
    pub fn next_sample(&mut self, frequency: f64) -> f64 {
        self.phase += 2.0 * PI * frequency / self.sample_rate;
        let inc = frequency / self.sample_rate;
        match self.waveform {
            Waveform::Sine => self.phase.sin(),
            Waveform::Sawtooth => self.sawtooth(inc),
            Waveform::Square => self.square(inc),
            Waveform::Triangle => self.triangle(),
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Position within the current cycle, in [0, 1).
    fn cycle(&self) -> f64 {
        (self.phase / TAU).fract()
    }

    fn sawtooth(&self, inc: f64) -> f64 {
        let t = self.cycle();
        (2.0 * t - 1.0) - poly_blep(t, inc)
    }

    fn square(&self, inc: f64) -> f64 {
        let t = self.cycle();
        let mut value = if t < 0.5 { 1.0 } else { -1.0 };
        value += poly_blep(t, inc);
        value -= poly_blep((t + 0.5) % 1.0, inc);
        value
    }

    fn triangle(&self) -> f64 {
        let t = self.cycle();
        if t < 0.5 { 4.0 * t - 1.0 } else { 3.0 - 4.0 * t }
    }
}

/// PolyBLEP correction around a waveform discontinuity.
///
/// `t` is the cycle position [0, 1), `dt` the per-sample increment.
fn poly_blep(t: f64, dt: f64) -> f64 {
    if t < dt {
        let t = t / dt;
        2.0 * t - t * t - 1.0
    } else if t > 1.0 - dt {
        let t = (t - 1.0) / dt;
        t * t + 2.0 * t + 1.0
    } else {
        0.0
    }
}
