use cinestream_model::{MovieRecord, progress_fraction};

/// The playback rates a user may select.
pub const PLAYBACK_RATES: [f64; 8] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Volume a freshly mounted player starts at.
pub const DEFAULT_VOLUME: f64 = 0.7;

/// Complete observable state of one player instance.
///
/// Owned exclusively by the controller; mutated only in response to user
/// intents, media lifecycle events, or timer expiry. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// The movie currently loaded, if any.
    pub current_movie: Option<MovieRecord>,
    /// True between a successful play request and pause/end.
    pub is_playing: bool,
    /// Seconds from the start of the source. Monotonic while playing except
    /// across an explicit seek.
    pub current_time: f64,
    /// Total length in seconds; 0 until metadata arrives, then fixed for the
    /// life of the loaded source.
    pub duration: f64,
    /// Output level in `[0, 1]`. Unaffected by mute.
    pub volume: f64,
    /// Mute suppresses output without changing `volume`.
    pub is_muted: bool,
    /// Ground truth reported by the environment, never set on request alone.
    pub is_fullscreen: bool,
    /// True between a stall and the resume (or end) that follows it.
    pub is_buffering: bool,
    /// Controls overlay visibility; always true while paused or buffering.
    pub show_controls: bool,
    /// One of [`PLAYBACK_RATES`].
    pub playback_rate: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_movie: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume: DEFAULT_VOLUME,
            is_muted: false,
            is_fullscreen: false,
            is_buffering: false,
            show_controls: true,
            playback_rate: 1.0,
        }
    }
}

impl PlaybackState {
    /// Reset the per-source transport fields for a new load.
    ///
    /// Volume, mute and fullscreen survive across loads; they belong to the
    /// viewing session, not the source.
    pub(crate) fn reset_for_load(&mut self) {
        self.is_playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.is_buffering = false;
        self.show_controls = true;
        self.playback_rate = 1.0;
    }

    /// Playback progress as a fraction in `[0, 1]` for the progress bar.
    pub fn progress(&self) -> f64 {
        progress_fraction(self.current_time, self.duration)
    }
}
