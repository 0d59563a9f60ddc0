//! DSP — swept-oscillator synthesis and WAV output.
//!
//! Everything here is deterministic: the same parameters always produce
//! the same samples, whether rendered by the CLI or through WASM.

pub mod oscillator;
pub mod ramp;
pub mod renderer;
pub mod synth;
