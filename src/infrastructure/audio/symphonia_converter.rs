use std::io::Cursor;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioConverter, ConversionError};
use crate::domain::{AudioFormat, Waveform};

/// All engines downstream expect this rate; 16kHz mono is what both Whisper
/// and the hosted recognizers are trained on.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Converts MP3 and WAV uploads into a 16kHz mono waveform using symphonia
/// for decoding and rubato for resampling.
pub struct SymphoniaConverter;

impl AudioConverter for SymphoniaConverter {
    fn convert(&self, data: &[u8], format: AudioFormat) -> Result<Waveform, ConversionError> {
        let mut reader = probe_container(data, format)?;

        let track = reader.default_track().ok_or_else(|| {
            ConversionError::DecodeFailed("no audio track found".to_string())
        })?;

        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let source_rate = codec_params
            .sample_rate
            .ok_or_else(|| ConversionError::DecodeFailed("unknown sample rate".to_string()))?;
        let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

        let decoder_opts = DecoderOptions::default();
        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &decoder_opts)
            .map_err(|e| ConversionError::DecodeFailed(format!("codec: {}", e)))?;

        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match reader.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(ConversionError::DecodeFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                    continue;
                }
                Err(e) => {
                    return Err(ConversionError::DecodeFailed(format!("decode: {}", e)));
                }
            };

            let spec = *decoded.spec();
            let frames = decoded.frames();
            if frames == 0 {
                continue;
            }

            let mut sample_buf = SampleBuffer::<f32>::new(frames as u64, spec);
            sample_buf.copy_interleaved_ref(decoded);
            downmix_into(&mut samples, sample_buf.samples(), channels);
        }

        if samples.is_empty() {
            return Err(ConversionError::DecodeFailed(
                "no audio samples decoded".to_string(),
            ));
        }

        if source_rate != TARGET_SAMPLE_RATE {
            samples = resample(&samples, source_rate, TARGET_SAMPLE_RATE)?;
        }

        tracing::debug!(
            samples = samples.len(),
            source_rate = source_rate,
            "Audio converted to 16kHz mono PCM"
        );

        Ok(Waveform::new(samples, TARGET_SAMPLE_RATE))
    }
}

fn probe_container(
    data: &[u8],
    format: AudioFormat,
) -> Result<Box<dyn FormatReader>, ConversionError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(format.extension());

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| match e {
            SymphoniaError::Unsupported(_) => {
                ConversionError::UnsupportedFormat(format!("{}: {}", format, e))
            }
            other => ConversionError::DecodeFailed(format!("probe: {}", other)),
        })?;

    Ok(probed.format)
}

fn downmix_into(output: &mut Vec<f32>, interleaved: &[f32], channels: usize) {
    if channels <= 1 {
        output.extend_from_slice(interleaved);
        return;
    }
    for frame in interleaved.chunks(channels) {
        let mono: f32 = frame.iter().sum::<f32>() / channels as f32;
        output.push(mono);
    }
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>, ConversionError> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let chunk_size = 1024;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, chunk_size, 1)
        .map_err(|e| ConversionError::DecodeFailed(format!("resampler init: {}", e)))?;

    let mut output = Vec::with_capacity((samples.len() as f64 * ratio) as usize + chunk_size);

    for chunk in samples.chunks(chunk_size) {
        let input = if chunk.len() < chunk_size {
            let mut padded = chunk.to_vec();
            padded.resize(chunk_size, 0.0);
            padded
        } else {
            chunk.to_vec()
        };

        let result = resampler
            .process(&[input], None)
            .map_err(|e| ConversionError::DecodeFailed(format!("resample: {}", e)))?;

        if let Some(channel) = result.first() {
            output.extend_from_slice(channel);
        }
    }

    // Trim the padding tail so output duration matches input duration.
    let expected_len = (samples.len() as f64 * ratio).round() as usize;
    output.truncate(expected_len);

    Ok(output)
}
