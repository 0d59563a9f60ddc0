//! WAV renderer — writes 16-bit mono PCM buffers as WAVE data.

use std::io::{self, Cursor, Seek, Write};
use std::path::Path;

use log::info;

use super::synth::ToneSynthesizer;
use crate::error::SfxError;
use crate::preset::{MAX_SAMPLES, SweepParameters};

const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// A 16-bit WAV declares its sizes in u32 fields.
fn ensure_fits(samples: &[i16]) -> Result<(), SfxError> {
    if samples.len() > MAX_SAMPLES {
        return Err(SfxError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} samples exceed the WAV size limit", samples.len()),
        )));
    }
    Ok(())
}

/// Stream `samples` through `writer` and patch the header's size fields.
fn write_frames<W: Write + Seek>(mut writer: hound::WavWriter<W>, samples: &[i16]) -> Result<(), SfxError> {
    {
        let mut frames = writer.get_i16_writer(samples.len() as u32);
        for &sample in samples {
            frames.write_sample(sample);
        }
        frames.flush()?;
    }
    writer.finalize()?;
    Ok(())
}

/// Write `samples` to `path` as a mono 16-bit WAV, replacing any existing
/// file.
pub fn write_wav(samples: &[i16], sample_rate: u32, path: impl AsRef<Path>) -> Result<(), SfxError> {
    let path = path.as_ref();
    ensure_fits(samples)?;
    let writer = hound::WavWriter::create(path, wav_spec(sample_rate))?;
    write_frames(writer, samples)?;
    info!("wrote {} ({} samples @ {} Hz)", path.display(), samples.len(), sample_rate);
    Ok(())
}

/// Encode mono i16 PCM samples to an in-memory WAV file.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>, SfxError> {
    ensure_fits(samples)?;
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    write_frames(hound::WavWriter::new(&mut cursor, wav_spec(sample_rate))?, samples)?;
    Ok(cursor.into_inner())
}

/// Render `params` and write the result to `path`.
pub fn render_to_file(params: &SweepParameters, path: impl AsRef<Path>) -> Result<usize, SfxError> {
    let synth = ToneSynthesizer::new(params.clone())?;
    let pcm = synth.render_pcm_i16();
    write_wav(&pcm, params.sample_rate, path)?;
    Ok(pcm.len())
}

/// Render `params` to a WAV file held in memory.
pub fn render_wav(params: &SweepParameters) -> Result<Vec<u8>, SfxError> {
    let pcm = ToneSynthesizer::new(params.clone())?.render_pcm_i16();
    encode_wav(&pcm, params.sample_rate)
}
