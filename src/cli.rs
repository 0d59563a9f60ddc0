//! Command-line argument parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use crate::error::SfxError;
use crate::preset::{SfxPreset, SweepParameters};
use crate::report::render_report;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "jumpsfx")]
#[command(about = "Render a swept-oscillator sound effect to a 16-bit mono WAV file", long_about = None)]
#[command(version)]
pub struct Args {
    /// Output WAV path (created or overwritten)
    #[arg(value_name = "OUTPUT", default_value = "jump.wav")]
    pub output: PathBuf,

    /// Built-in effect: jump (default), kick, rhythm, hit
    #[arg(long, value_name = "NAME", default_value = "jump")]
    pub preset: String,

    /// JSON file with sweep parameters; keys it sets override the preset
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Output sample rate in Hz (overrides preset and parameter file)
    #[arg(long, value_name = "HZ")]
    pub sample_rate: Option<u32>,
}

impl Args {
    /// Resolve the sweep to render: preset, then parameter file, then
    /// `--sample-rate`. Errors come back formatted for the terminal.
    pub fn sweep_parameters(&self) -> Result<SweepParameters, String> {
        let preset: SfxPreset = self.preset.parse().map_err(|e: SfxError| e.to_string())?;
        let mut params = preset.params();
        debug!("preset '{}': {:?}", preset.name(), params);

        if let Some(path) = &self.params {
            let source = std::fs::read_to_string(path)
                .map_err(|e| format!("{}: {}", path.display(), SfxError::from(e)))?;
            params = SweepParameters::from_json_over(&params, &source).map_err(|e| {
                let color = std::io::stderr().is_terminal();
                render_report(&e, &path.display().to_string(), &source, color)
            })?;
            debug!("after {}: {:?}", path.display(), params);
        }

        if let Some(rate) = self.sample_rate {
            params.sample_rate = rate;
            params.validate().map_err(|e| SfxError::from(e).to_string())?;
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn no_arguments_render_jump_to_default_path() {
        let args = Args::try_parse_from(["jumpsfx"]).unwrap();
        assert_eq!(args.output, PathBuf::from("jump.wav"));
        assert_eq!(args.sweep_parameters().unwrap(), SweepParameters::default());
    }

    #[test]
    fn preset_and_sample_rate() {
        let args =
            Args::try_parse_from(["jumpsfx", "kick.wav", "--preset", "kick", "--sample-rate", "22050"])
                .unwrap();
        let params = args.sweep_parameters().unwrap();
        assert_eq!(params.sample_rate, 22050);
        assert_eq!(params.start_freq, 150.0);
    }

    #[test]
    fn unknown_preset_is_reported() {
        let args = Args::try_parse_from(["jumpsfx", "--preset", "laser"]).unwrap();
        let err = args.sweep_parameters().unwrap_err();
        assert!(err.contains("laser"), "{err}");
    }

    #[test]
    fn zero_sample_rate_is_rejected() {
        let args = Args::try_parse_from(["jumpsfx", "--sample-rate", "0"]).unwrap();
        assert!(args.sweep_parameters().unwrap_err().contains("sample rate"));
    }

    #[test]
    fn params_file_overrides_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, r#"{ "endFreq": 1200, "waveform": "triangle" }"#).unwrap();

        let argv: Vec<OsString> = vec!["jumpsfx".into(), "--params".into(), path.into_os_string()];
        let args = Args::try_parse_from(argv).unwrap();
        let params = args.sweep_parameters().unwrap();
        assert_eq!(params.end_freq, 1200.0);
        assert_eq!(params.start_freq, 600.0);
    }

    #[test]
    fn non_object_params_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [("num.json", "42"), ("list.json", "[]"), ("str.json", "\"x\"")] {
            let path = dir.path().join(name);
            std::fs::write(&path, body).unwrap();

            let argv: Vec<OsString> = vec!["jumpsfx".into(), "--params".into(), path.into_os_string()];
            let args = Args::try_parse_from(argv).unwrap();
            let err = args.sweep_parameters().unwrap_err();
            assert!(err.contains(name), "{name}: {err}");
        }
    }

    #[test]
    fn bad_params_file_gets_annotated_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ \"startFreq\": -600 }").unwrap();

        let argv: Vec<OsString> = vec!["jumpsfx".into(), "--params".into(), path.into_os_string()];
        let args = Args::try_parse_from(argv).unwrap();
        let err = args.sweep_parameters().unwrap_err();
        assert!(err.contains("bad.json"), "{err}");
        assert!(err.contains("startFreq"), "{err}");
    }
}
