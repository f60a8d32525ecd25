//! Notification sound service.
//!
//! # Responsibility
//! - Play the alert tone on demand, best effort.
//! - Hold the only mutable sound settings: `enabled` and `volume`.
//!
//! # Invariants
//! - `play()` never panics or returns an error to the caller; audio
//!   failures degrade to silence and are logged at `warn`.
//! - Every `play()` builds a fresh generator and acquires a fresh output.
//! - Volume is always inside `[0, 1]`.

use crate::sound::output::{AudioBackend, AudioError, UnavailableAudioBackend};
use crate::sound::tone::{ToneGenerator, ToneSpec};
use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

/// Volume applied when no configuration is given.
pub const DEFAULT_VOLUME: f32 = 0.5;

static SHARED_SOUND: OnceCell<NotificationSound> = OnceCell::new();

/// Sound settings as loaded from host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
    pub volume: f32,
}

impl SoundConfig {
    /// Returns a copy with volume saturated into `[0, 1]`.
    pub fn validated(self) -> Self {
        Self {
            enabled: self.enabled,
            volume: clamp_volume(self.volume),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// Shared-instance installation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundInstallError {
    /// The shared instance exists already, either installed earlier or
    /// created as the silent default by `shared_sound()`.
    AlreadyInstalled,
}

impl Display for SoundInstallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInstalled => write!(f, "shared notification sound already initialized"),
        }
    }
}

impl Error for SoundInstallError {}

/// What one `play()` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    /// Sound is switched off; nothing was attempted.
    Disabled,
    /// Audio failed and the call fell back to silence.
    Degraded,
}

/// Alert sound source.
pub struct NotificationSound {
    backend: Arc<dyn AudioBackend>,
    tone: ToneSpec,
    enabled: AtomicBool,
    volume_bits: AtomicU32,
}

impl NotificationSound {
    pub fn new(backend: Arc<dyn AudioBackend>, config: SoundConfig) -> Self {
        let config = config.validated();
        Self {
            backend,
            tone: ToneSpec::alert(),
            enabled: AtomicBool::new(config.enabled),
            volume_bits: AtomicU32::new(config.volume.to_bits()),
        }
    }

    /// Replaces the alert shape.
    pub fn with_tone(mut self, tone: ToneSpec) -> Self {
        self.tone = tone;
        self
    }

    /// Plays the alert once.
    ///
    /// Overlapping calls are neither queued nor coalesced.
    pub fn play(&self) -> PlayOutcome {
        if !self.is_sound_enabled() {
            return PlayOutcome::Disabled;
        }
        let volume = self.volume();
        let attempt = catch_unwind(AssertUnwindSafe(|| self.play_once(volume)));
        match attempt {
            Ok(Ok(())) => {
                debug!("event=sound_play module=sound status=ok volume={volume:.2}");
                PlayOutcome::Played
            }
            Ok(Err(err)) => {
                warn!("event=sound_play module=sound status=degraded error={err}");
                PlayOutcome::Degraded
            }
            Err(_) => {
                warn!("event=sound_play module=sound status=degraded error=backend_panic");
                PlayOutcome::Degraded
            }
        }
    }

    fn play_once(&self, volume: f32) -> Result<(), AudioError> {
        let output = self.backend.open()?;
        let tone = ToneGenerator::new(self.tone.clone(), volume, output.sample_rate());
        output.play(tone)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Sets the volume, saturating values outside `[0, 1]`.
    pub fn set_volume(&self, volume: f32) {
        self.volume_bits
            .store(clamp_volume(volume).to_bits(), Ordering::Relaxed);
    }

    pub fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Current settings snapshot.
    pub fn config(&self) -> SoundConfig {
        SoundConfig {
            enabled: self.is_sound_enabled(),
            volume: self.volume(),
        }
    }

    /// Restores default settings.
    pub fn reset(&self) {
        let defaults = SoundConfig::default();
        self.set_enabled(defaults.enabled);
        self.set_volume(defaults.volume);
    }
}

impl std::fmt::Debug for NotificationSound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationSound")
            .field("enabled", &self.is_sound_enabled())
            .field("volume", &self.volume())
            .finish_non_exhaustive()
    }
}

/// Installs the process-wide sound instance.
///
/// # Errors
/// - `AlreadyInstalled` when the shared instance already exists, including
///   when `shared_sound()` created the silent default first.
pub fn install_shared_sound(
    backend: Arc<dyn AudioBackend>,
    config: SoundConfig,
) -> Result<(), SoundInstallError> {
    SHARED_SOUND
        .set(NotificationSound::new(backend, config))
        .map_err(|_| {
            warn!("event=sound_init module=sound status=rejected reason=already_installed");
            SoundInstallError::AlreadyInstalled
        })
}

/// Returns the process-wide sound instance.
///
/// Falls back to a silent instance when none was installed.
pub fn shared_sound() -> &'static NotificationSound {
    SHARED_SOUND.get_or_init(|| {
        debug!("event=sound_init module=sound status=fallback backend=unavailable");
        NotificationSound::new(Arc::new(UnavailableAudioBackend), SoundConfig::default())
    })
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return 0.0;
    }
    volume.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::{clamp_volume, SoundConfig, SoundInstallError};

    #[test]
    fn clamp_saturates_and_rejects_nan() {
        assert_eq!(clamp_volume(-0.5), 0.0);
        assert_eq!(clamp_volume(1.7), 1.0);
        assert_eq!(clamp_volume(0.25), 0.25);
        assert_eq!(clamp_volume(f32::NAN), 0.0);
        assert_eq!(clamp_volume(f32::INFINITY), 1.0);
    }

    #[test]
    fn validated_config_clamps_volume() {
        let config = SoundConfig {
            enabled: false,
            volume: 3.0,
        }
        .validated();
        assert!(!config.enabled);
        assert_eq!(config.volume, 1.0);
    }

    #[test]
    fn install_error_message_is_stable() {
        assert_eq!(
            SoundInstallError::AlreadyInstalled.to_string(),
            "shared notification sound already initialized"
        );
    }
}
