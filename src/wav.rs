//! Minimal RIFF/WAVE header probe.
//!
//! Sound effects are handed to the audio device as whole in-memory buffers,
//! so only plain PCM containers are accepted: 1 or 2 channels, 8 or 16 bits
//! per sample. The probe reads the canonical 44-byte header and rejects
//! anything else before the file reaches the device.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Errors produced when probing a WAV file.
#[derive(Debug, Error)]
pub enum WavError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("header truncated")]
    TruncatedHeader,
    #[error("not a RIFF file")]
    NotRiff,
    #[error("not a WAVE file")]
    NotWave,
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Parsed facts about a PCM WAV container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub data_len: u32,
}

/// Probe the header of a WAV file on disk.
pub fn probe(path: impl AsRef<Path>) -> Result<WavSpec, WavError> {
    probe_reader(&mut File::open(path)?)
}

/// Probe the canonical 44-byte header from any reader.
pub fn probe_reader<R: Read>(reader: &mut R) -> Result<WavSpec, WavError> {
    let mut header = [0u8; 44];
    let mut filled = 0;
    while filled < header.len() {
        let n = reader.read(&mut header[filled..])?;
        if n == 0 {
            return Err(WavError::TruncatedHeader);
        }
        filled += n;
    }

    if &header[0..4] != b"RIFF" {
        return Err(WavError::NotRiff);
    }
    if &header[8..16] != b"WAVEfmt " {
        return Err(WavError::NotWave);
    }

    let audio_format = u16::from_le_bytes([header[20], header[21]]);
    if audio_format != 1 {
        return Err(WavError::UnsupportedFormat(format!(
            "audio format {audio_format}, only PCM is supported"
        )));
    }

    let channels = u16::from_le_bytes([header[22], header[23]]);
    if !(1..=2).contains(&channels) {
        return Err(WavError::UnsupportedFormat(format!("{channels} channels")));
    }

    let sample_rate = u32::from_le_bytes([header[24], header[25], header[26], header[27]]);
    let bits_per_sample = u16::from_le_bytes([header[34], header[35]]);
    if bits_per_sample != 8 && bits_per_sample != 16 {
        return Err(WavError::UnsupportedFormat(format!(
            "{bits_per_sample} bits per sample"
        )));
    }

    let data_len = u32::from_le_bytes([header[40], header[41], header[42], header[43]]);

    Ok(WavSpec {
        channels,
        sample_rate,
        bits_per_sample,
        data_len,
    })
}
