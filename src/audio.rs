// Microphone capture feeding the sound monitor

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::traits::Producer;
use ringbuf::HeapProd;

/// Normalized RMS level below which the room counts as silent.
pub const SILENT_LIMIT: f64 = 0.05;

/// Start capturing from the default input device.
///
/// Each callback pushes one normalized RMS amplitude into `levels`; the
/// consumer half lives in the sound monitor, which drains at its own pace.
/// When the queue is full samples are dropped, never blocked on — the
/// capture callback runs on the audio thread.
pub fn start_audio_capture(
    mut levels: HeapProd<f64>,
) -> Result<cpal::Stream, Box<dyn std::error::Error>> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or("No input device available")?;

    println!("Using audio input device: {}", device.name()?);

    let config = device.default_input_config()?;
    log::debug!("audio config: {:?}", config);

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => device.build_input_stream(
            &config.into(),
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                let sum: f32 = data.iter().map(|&s| s * s).sum();
                let rms = (sum / data.len() as f32).sqrt();
                let _ = levels.try_push(rms as f64);
            },
            |err| eprintln!("Audio stream error: {}", err),
            None,
        )?,
        cpal::SampleFormat::I16 => device.build_input_stream(
            &config.into(),
            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                // Normalize i16 to the same 0.0-1.0 range as f32 input
                let sum: f32 = data
                    .iter()
                    .map(|&s| {
                        let normalized = s as f32 / i16::MAX as f32;
                        normalized * normalized
                    })
                    .sum();
                let rms = (sum / data.len() as f32).sqrt();
                let _ = levels.try_push(rms as f64);
            },
            |err| eprintln!("Audio stream error: {}", err),
            None,
        )?,
        _ => return Err("Unsupported sample format".into()),
    };

    stream.play()?;
    Ok(stream)
}
