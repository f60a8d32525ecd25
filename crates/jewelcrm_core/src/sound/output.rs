//! Audio output seam.
//!
//! # Responsibility
//! - Abstract the platform audio facility behind `AudioBackend`.
//! - Ship headless backends for hosts without audio and for tests.
//!
//! # Invariants
//! - `AudioBackend::open` acquires a fresh output per tone; an
//!   `AudioOutput` is consumed by `play` and never reused.

use crate::sound::tone::ToneGenerator;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Sample rate used by `MemoryAudioBackend::default()`.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Tones kept by a `MemoryAudioBackend` unless configured otherwise.
pub const DEFAULT_RETENTION: usize = 16;

/// Audio facility failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No output device or audio runtime is available.
    Unavailable(String),
    /// The output refused or failed to play the tone.
    Rejected(String),
}

impl Display for AudioError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "audio output unavailable: {reason}"),
            Self::Rejected(reason) => write!(f, "audio output rejected tone: {reason}"),
        }
    }
}

impl Error for AudioError {}

/// Platform audio facility.
pub trait AudioBackend: Send + Sync {
    /// Acquires one output pipeline for a single tone.
    fn open(&self) -> Result<Box<dyn AudioOutput>, AudioError>;
}

/// One acquired output pipeline.
pub trait AudioOutput {
    fn sample_rate(&self) -> u32;

    /// Schedules `tone` from start to stop and releases the pipeline.
    fn play(self: Box<Self>, tone: ToneGenerator) -> Result<(), AudioError>;
}

/// Backend for environments without audio; every `open` fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAudioBackend;

impl AudioBackend for UnavailableAudioBackend {
    fn open(&self) -> Result<Box<dyn AudioOutput>, AudioError> {
        Err(AudioError::Unavailable(
            "no audio backend installed".to_string(),
        ))
    }
}

/// Samples rendered by one `play` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTone {
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

impl RenderedTone {
    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .fold(0.0_f32, |peak, sample| peak.max(sample.abs()))
    }
}

/// Backend that renders tones into memory.
///
/// Clones share the same buffer, so a host can keep one handle for
/// inspection while the sound service owns another. Only the most recent
/// `retention` tones are kept.
#[derive(Debug, Clone)]
pub struct MemoryAudioBackend {
    sample_rate: u32,
    retention: usize,
    sink: Arc<Mutex<RenderSink>>,
}

#[derive(Debug, Default)]
struct RenderSink {
    tones: VecDeque<RenderedTone>,
    plays: usize,
}

impl RenderSink {
    fn push(&mut self, tone: RenderedTone, retention: usize) {
        self.plays += 1;
        if retention == 0 {
            return;
        }
        while self.tones.len() >= retention {
            self.tones.pop_front();
        }
        self.tones.push_back(tone);
    }
}

impl MemoryAudioBackend {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            retention: DEFAULT_RETENTION,
            sink: Arc::new(Mutex::new(RenderSink::default())),
        }
    }

    /// Keeps at most `retention` tones; `0` keeps none.
    pub fn with_retention(mut self, retention: usize) -> Self {
        self.retention = retention;
        self
    }

    /// Returns a copy of the retained tones, oldest first.
    pub fn rendered(&self) -> Vec<RenderedTone> {
        self.with_sink(|sink| sink.tones.iter().cloned().collect())
    }

    /// Drains the retained tones, oldest first.
    pub fn take_rendered(&self) -> Vec<RenderedTone> {
        self.with_sink(|sink| sink.tones.drain(..).collect())
    }

    /// Number of tones played since creation, retained or not.
    pub fn play_count(&self) -> usize {
        self.with_sink(|sink| sink.plays)
    }

    fn with_sink<T>(&self, f: impl FnOnce(&mut RenderSink) -> T) -> T {
        match self.sink.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl Default for MemoryAudioBackend {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl AudioBackend for MemoryAudioBackend {
    fn open(&self) -> Result<Box<dyn AudioOutput>, AudioError> {
        if self.sample_rate == 0 {
            return Err(AudioError::Unavailable(
                "memory backend configured with zero sample rate".to_string(),
            ));
        }
        Ok(Box::new(MemoryOutput {
            sample_rate: self.sample_rate,
            retention: self.retention,
            sink: Arc::clone(&self.sink),
        }))
    }
}

struct MemoryOutput {
    sample_rate: u32,
    retention: usize,
    sink: Arc<Mutex<RenderSink>>,
}

impl AudioOutput for MemoryOutput {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn play(self: Box<Self>, tone: ToneGenerator) -> Result<(), AudioError> {
        let rendered = RenderedTone {
            sample_rate: tone.sample_rate(),
            samples: tone.collect(),
        };
        let mut guard = self
            .sink
            .lock()
            .map_err(|_| AudioError::Rejected("render buffer poisoned".to_string()))?;
        guard.push(rendered, self.retention);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AudioBackend, AudioError, MemoryAudioBackend, UnavailableAudioBackend};
    use crate::sound::tone::{ToneGenerator, ToneSpec};

    #[test]
    fn unavailable_backend_never_opens() {
        let err = UnavailableAudioBackend
            .open()
            .err()
            .expect("open must fail");
        assert!(matches!(err, AudioError::Unavailable(_)));
    }

    #[test]
    fn memory_backend_collects_each_play() {
        let backend = MemoryAudioBackend::new(8_000);
        for _ in 0..2 {
            let output = backend.open().expect("memory output");
            let tone = ToneGenerator::new(ToneSpec::alert(), 1.0, output.sample_rate());
            output.play(tone).expect("memory play");
        }

        let rendered = backend.rendered();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].samples.len(), 2_400);
        assert_eq!(rendered[0], rendered[1]);
    }

    fn play_alert(backend: &MemoryAudioBackend) {
        let output = backend.open().expect("memory output");
        let tone = ToneGenerator::new(ToneSpec::alert(), 1.0, output.sample_rate());
        output.play(tone).expect("memory play");
    }

    #[test]
    fn memory_backend_retention_is_bounded() {
        let backend = MemoryAudioBackend::new(8_000).with_retention(3);
        for _ in 0..10 {
            play_alert(&backend);
        }

        assert_eq!(backend.rendered().len(), 3);
        assert_eq!(backend.play_count(), 10);
        assert_eq!(backend.take_rendered().len(), 3);
        assert!(backend.rendered().is_empty());

        play_alert(&backend);
        assert_eq!(backend.rendered().len(), 1);
        assert_eq!(backend.play_count(), 11);
    }

    #[test]
    fn zero_retention_keeps_nothing_but_counts_plays() {
        let backend = MemoryAudioBackend::new(8_000).with_retention(0);
        play_alert(&backend);
        assert!(backend.rendered().is_empty());
        assert_eq!(backend.play_count(), 1);
    }

    #[test]
    fn zero_rate_memory_backend_reports_unavailable() {
        let err = MemoryAudioBackend::new(0)
            .open()
            .err()
            .expect("open must fail");
        assert!(matches!(err, AudioError::Unavailable(_)));
    }
}
