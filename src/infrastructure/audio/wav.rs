use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::domain::Waveform;

/// Encodes a waveform as 16-bit PCM WAV, the container the hosted
/// recognition APIs accept.
pub fn encode_wav(waveform: &Waveform) -> Result<Vec<u8>, hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: waveform.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    for &sample in &waveform.samples {
        writer.write_sample(pcm16(sample))?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}

fn pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16
}
