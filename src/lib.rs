pub mod cli;
pub mod dsp;
pub mod error;
pub mod preset;
pub mod report;

use crate::error::SfxError;
use crate::preset::{SfxPreset, SweepParameters};
use wasm_bindgen::prelude::*;

pub use crate::dsp::renderer::{encode_wav, render_to_file, write_wav};
pub use crate::dsp::synth::{ToneSynthesizer, generate};

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the jumpsfx version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

fn js_err(e: SfxError) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

/// Look up a built-in preset and override its sample rate.
fn preset_at_rate(name: &str, sample_rate: u32) -> Result<SweepParameters, SfxError> {
    let preset: SfxPreset = name.parse()?;
    Ok(SweepParameters { sample_rate, ..preset.params() })
}

/// WASM-exposed: render a built-in preset ("jump", "kick", ...) to WAV bytes.
#[wasm_bindgen]
pub fn render_sfx_wav(preset: &str, sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    let params = preset_at_rate(preset, sample_rate).map_err(js_err)?;
    dsp::renderer::render_wav(&params).map_err(js_err)
}

/// WASM-exposed: return a built-in preset's parameters as a JS object.
#[wasm_bindgen]
pub fn preset_params(preset: &str) -> Result<JsValue, JsValue> {
    let preset: SfxPreset = preset.parse().map_err(js_err)?;
    serde_wasm_bindgen::to_value(&preset.params()).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render a JSON parameter object to WAV bytes.
#[wasm_bindgen]
pub fn render_params_wav(params_json: &str) -> Result<Vec<u8>, JsValue> {
    let params = SweepParameters::from_json(params_json).map_err(js_err)?;
    dsp::renderer::render_wav(&params).map_err(js_err)
}

/// WASM-exposed: render a parameter object to mono f32 samples in [-1, 1],
/// for direct playback through an AudioBuffer.
#[wasm_bindgen]
pub fn render_params_samples(params: JsValue) -> Result<Vec<f32>, JsValue> {
    let params: SweepParameters =
        serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let synth = ToneSynthesizer::new(params).map_err(js_err)?;
    Ok(synth.render().iter().map(|&s| s as f32).collect())
}
