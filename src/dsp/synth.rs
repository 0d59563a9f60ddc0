//! Tone synthesizer — renders a `SweepParameters` record to samples.
//!
//! Frequency and gain follow independent exponential ramps over the
//! duration. Each sample is clamped to [-1, 1] and quantized to 16 bits by
//! truncating toward zero.

use log::debug;

use super::oscillator::SweepOscillator;
use super::ramp::ExpRamp;
use crate::error::SfxError;
use crate::preset::SweepParameters;

/// Largest magnitude a quantized sample can take.
pub const PCM_FULL_SCALE: f64 = 32767.0;

#[derive(Debug, Clone)]
pub struct ToneSynthesizer {
    params: SweepParameters,
    frequency: ExpRamp,
    gain: ExpRamp,
}

impl ToneSynthesizer {
    /// Build a synthesizer for validated parameters.
    pub fn new(params: SweepParameters) -> Result<Self, SfxError> {
        params.validate()?;
        Ok(ToneSynthesizer {
            frequency: ExpRamp::new(params.start_freq, params.end_freq),
            gain: ExpRamp::new(params.start_gain, params.end_gain),
            params,
        })
    }

    pub fn params(&self) -> &SweepParameters {
        &self.params
    }

    /// Render clamped samples in [-1, 1].
    pub fn render(&self) -> Vec<f64> {
        let sample_rate = self.params.sample_rate as f64;
        let n = self.params.num_samples();
        let mut osc = SweepOscillator::new(self.params.waveform, sample_rate);
        let mut out = Vec::with_capacity(n);

        for i in 0..n {
            let t = i as f64 / sample_rate;
            let progress = t / self.params.duration;
            let sample = osc.next_sample(self.frequency.at(progress));
            let raw = self.gain.at(progress) * sample;
            out.push(raw.clamp(-1.0, 1.0));
        }

        debug!(
            "rendered {n} samples ({:?}, {} -> {} Hz)",
            self.params.waveform, self.params.start_freq, self.params.end_freq
        );
        out
    }

    /// Render to 16-bit PCM.
    pub fn render_pcm_i16(&self) -> Vec<i16> {
        self.render().into_iter().map(quantize).collect()
    }
}

/// Convert a clamped sample to i16, truncating toward zero.
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * PCM_FULL_SCALE) as i16
}

/// Validate `params` and render them to a 16-bit sample buffer.
pub fn generate(params: &SweepParameters) -> Result<Vec<i16>, SfxError> {
    Ok(ToneSynthesizer::new(params.clone())?.render_pcm_i16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::oscillator::Waveform;
    use crate::error::ParamError;
    use std::f64::consts::PI;

    #[test]
    fn jump_sound_length_and_first_sample() {
        let buf = generate(&SweepParameters::default()).unwrap();
        assert_eq!(buf.len(), 6615);
        // 0.5 * sin(2π·600/44100) * 32767 = 1398.85…, truncated
        assert_eq!(buf[0], 1398);
    }

    #[test]
    fn length_is_floor_of_rate_times_duration() {
        for (rate, duration) in [(8000, 0.1), (22050, 0.333), (44100, 1.0), (48000, 0.0101), (3, 0.5)] {
            let params = SweepParameters { sample_rate: rate, duration, ..Default::default() };
            let buf = generate(&params).unwrap();
            assert_eq!(buf.len(), (rate as f64 * duration).floor() as usize, "rate={rate} dur={duration}");
        }
    }

    #[test]
    fn samples_stay_within_full_scale() {
        for s in generate(&SweepParameters::default()).unwrap() {
            assert!((-32767..=32767).contains(&s), "sample out of range: {s}");
        }
    }

    #[test]
    fn overdriven_gain_clips_at_full_scale() {
        let loud = SweepParameters { start_gain: 4.0, end_gain: 2.0, duration: 0.2, ..Default::default() };
        let buf = generate(&loud).unwrap();
        assert!(buf.iter().all(|s| (-32767..=32767).contains(s)));
        assert!(buf.contains(&32767), "positive peaks should clip");
        assert!(buf.contains(&-32767), "negative peaks should clip");
    }

    #[test]
    fn constant_sweep_is_pure_sine() {
        let params = SweepParameters {
            sample_rate: 8000,
            duration: 0.05,
            start_freq: 440.0,
            end_freq: 440.0,
            start_gain: 0.25,
            end_gain: 0.25,
            waveform: Waveform::Sine,
        };
        let buf = generate(&params).unwrap();
        let inc = 2.0 * PI * 440.0 / 8000.0;
        let mut phase = 0.0;
        for (i, &s) in buf.iter().enumerate() {
            phase += inc;
            let expected = (0.25 * f64::sin(phase) * PCM_FULL_SCALE) as i16;
            assert!((s - expected).abs() <= 1, "sample {i}: {s} vs {expected}");
        }
    }

    #[test]
    fn zero_gain_is_silent() {
        let params = SweepParameters { start_gain: 0.0, end_gain: 0.0, ..Default::default() };
        assert!(generate(&params).unwrap().iter().all(|&s| s == 0));
    }

    #[test]
    fn generation_is_deterministic() {
        let params = SweepParameters::default();
        assert_eq!(generate(&params).unwrap(), generate(&params).unwrap());
    }

    #[test]
    fn invalid_frequency_fails_fast() {
        let params = SweepParameters { end_freq: 0.0, ..Default::default() };
        let err = generate(&params).unwrap_err();
        assert!(matches!(
            err,
            SfxError::InvalidParameter(ParamError::Frequency { field: "endFreq", .. })
        ));
    }

    #[test]
    fn quantize_truncates_toward_zero() {
        assert_eq!(quantize(0.5), 16383);
        assert_eq!(quantize(-0.5), -16383);
        assert_eq!(quantize(1.0), 32767);
        assert_eq!(quantize(-1.0), -32767);
        assert_eq!(quantize(2.0), 32767);
        assert_eq!(quantize(0.99999 / PCM_FULL_SCALE), 0);
    }

    #[test]
    fn jump_sound_fades_out() {
        let buf = generate(&SweepParameters::default()).unwrap();
        let head = buf[..500].iter().map(|s| s.unsigned_abs()).max().unwrap();
        let tail = buf[buf.len() - 500..].iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert!(tail < head / 10, "tail peak {tail} should be far below head peak {head}");
    }
}
