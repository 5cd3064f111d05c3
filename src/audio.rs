//! Audio cues
//!
//! The simulation never plays sound itself. It emits [`AudioCue`] events
//! into a [`CueSink`] and the host decides what to do with them.

use crate::settings::Settings;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCue {
    /// A pokable was hit; smaller targets pitch higher
    Hit { volume: f32, pitch: f32, pan: f32 },
    /// A tap landed on empty space
    Miss,
    /// A UI button was pressed (pause, resume, stop)
    UiAction,
}

/// Receiver for cues emitted by the simulation
pub trait CueSink {
    fn emit(&mut self, cue: AudioCue);
}

/// Collect cues in order (handy for hosts that drain once per frame)
impl CueSink for Vec<AudioCue> {
    fn emit(&mut self, cue: AudioCue) {
        self.push(cue);
    }
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CueSink for NullSink {
    fn emit(&mut self, _cue: AudioCue) {}
}

/// Logs every cue at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn emit(&mut self, cue: AudioCue) {
        log::debug!("cue: {:?}", cue);
    }
}

/// Applies the player's volume settings before forwarding to an inner sink
pub struct CueMixer<S: CueSink> {
    inner: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: CueSink> CueMixer<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(inner: S, settings: &Settings) -> Self {
        let mut mixer = Self::new(inner);
        mixer.apply_settings(settings);
        mixer
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all cues
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: CueSink> CueSink for CueMixer<S> {
    fn emit(&mut self, cue: AudioCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let cue = match cue {
            AudioCue::Hit { volume, pitch, pan } => AudioCue::Hit {
                volume: volume * vol,
                pitch,
                pan,
            },
            other => other,
        };
        self.inner.emit(cue);
    }
}
