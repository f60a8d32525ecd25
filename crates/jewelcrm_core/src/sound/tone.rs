//! Procedural alert tone.
//!
//! # Responsibility
//! - Describe the alert as frequency and gain breakpoints.
//! - Render it as mono `f32` samples through a single-use generator.
//!
//! # Invariants
//! - Gain starts and ends at zero, so playback has no onset/offset click.
//! - A `ToneGenerator` is consumed by playback; once exhausted it only
//!   yields `None`.

use std::f32::consts::TAU;
use std::iter::FusedIterator;
use std::time::Duration;

/// Alert length.
pub const ALERT_DURATION: Duration = Duration::from_millis(300);
/// Gain attack time from silence to full volume.
pub const ALERT_ATTACK: Duration = Duration::from_millis(10);
const ALERT_HIGH_HZ: f32 = 800.0;
const ALERT_LOW_HZ: f32 = 600.0;

/// Oscillator frequency held from `at` until the next breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBreakpoint {
    pub at: Duration,
    pub hz: f32,
}

/// Relative gain reached at `at`, ramped linearly from the previous point.
///
/// `level` is scaled by the playback volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainBreakpoint {
    pub at: Duration,
    pub level: f32,
}

/// Shape of one tone.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneSpec {
    pub duration: Duration,
    /// Sorted by `at`; the first point should sit at zero.
    pub frequencies: Vec<FrequencyBreakpoint>,
    /// Sorted by `at`.
    pub gain: Vec<GainBreakpoint>,
}

impl ToneSpec {
    /// High-low-high "ding" with a 10 ms attack and linear release.
    pub fn alert() -> Self {
        Self {
            duration: ALERT_DURATION,
            frequencies: vec![
                FrequencyBreakpoint {
                    at: Duration::ZERO,
                    hz: ALERT_HIGH_HZ,
                },
                FrequencyBreakpoint {
                    at: Duration::from_millis(100),
                    hz: ALERT_LOW_HZ,
                },
                FrequencyBreakpoint {
                    at: Duration::from_millis(200),
                    hz: ALERT_HIGH_HZ,
                },
            ],
            gain: vec![
                GainBreakpoint {
                    at: Duration::ZERO,
                    level: 0.0,
                },
                GainBreakpoint {
                    at: ALERT_ATTACK,
                    level: 1.0,
                },
                GainBreakpoint {
                    at: ALERT_DURATION,
                    level: 0.0,
                },
            ],
        }
    }

    /// Frequency in effect at `seconds` (step changes).
    pub fn frequency_at(&self, seconds: f32) -> f32 {
        self.frequencies
            .iter()
            .take_while(|point| point.at.as_secs_f32() <= seconds)
            .last()
            .or_else(|| self.frequencies.first())
            .map(|point| point.hz)
            .unwrap_or(0.0)
    }

    /// Relative gain at `seconds` (linear between breakpoints).
    pub fn gain_at(&self, seconds: f32) -> f32 {
        let Some(first) = self.gain.first() else {
            return 0.0;
        };
        if seconds <= first.at.as_secs_f32() {
            return first.level;
        }
        for pair in self.gain.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let start = from.at.as_secs_f32();
            let end = to.at.as_secs_f32();
            if seconds <= end {
                let span = end - start;
                if span <= 0.0 {
                    return to.level;
                }
                let progress = (seconds - start) / span;
                return from.level + (to.level - from.level) * progress;
            }
        }
        self.gain.last().map(|point| point.level).unwrap_or(0.0)
    }
}

impl Default for ToneSpec {
    fn default() -> Self {
        Self::alert()
    }
}

/// Single-use sine oscillator rendering one `ToneSpec`.
///
/// A generator cannot be copied; replaying a tone means building a new one.
///
/// ```compile_fail
/// use jewelcrm_core::{ToneGenerator, ToneSpec};
///
/// let tone = ToneGenerator::new(ToneSpec::alert(), 1.0, 8_000);
/// let _replay = tone.clone();
/// ```
#[derive(Debug)]
pub struct ToneGenerator {
    spec: ToneSpec,
    volume: f32,
    sample_rate: u32,
    total_samples: u64,
    next_index: u64,
    phase: f32,
}

impl ToneGenerator {
    /// Prepares a generator; `volume` is expected in `[0, 1]`.
    pub fn new(spec: ToneSpec, volume: f32, sample_rate: u32) -> Self {
        let total_samples = if sample_rate == 0 {
            0
        } else {
            (spec.duration.as_secs_f64() * f64::from(sample_rate)).round() as u64
        };
        Self {
            spec,
            volume,
            sample_rate,
            total_samples,
            next_index: 0,
            phase: 0.0,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_finished(&self) -> bool {
        self.next_index >= self.total_samples
    }
}

impl Iterator for ToneGenerator {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.is_finished() {
            return None;
        }
        let rate = self.sample_rate as f32;
        let seconds = self.next_index as f32 / rate;
        let gain = self.volume * self.spec.gain_at(seconds);
        let sample = (self.phase * TAU).sin() * gain;

        self.phase = (self.phase + self.spec.frequency_at(seconds) / rate).fract();
        self.next_index += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total_samples.saturating_sub(self.next_index);
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl FusedIterator for ToneGenerator {}
