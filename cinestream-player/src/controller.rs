use std::fmt;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::error::{PlayerError, Result};
use crate::media::{MediaEvent, MediaResource};
use crate::state::{PLAYBACK_RATES, PlaybackState};
use cinestream_model::MovieRecord;

/// How long the controls overlay stays up without input during playback.
pub(crate) const CONTROLS_HIDE_AFTER: Duration = Duration::from_millis(3000);

/// How long an issued seek may wait for a consistent position report before
/// the optimistic position stops shadowing incoming time updates.
const SEEK_CONFIRM_TIMEOUT: Duration = Duration::from_millis(500);

/// A position report within this many seconds of the seek target counts as
/// its confirmation.
const SEEK_CONFIRM_EPSILON: f64 = 0.5;

/// Handle returned by [`PlaybackController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PlaybackState)>;

/// Owns [`PlaybackState`] and mediates between user intents, the underlying
/// [`MediaResource`], and the controls auto-hide countdown.
///
/// Single-threaded and event-driven: every transition happens inside one of
/// the public calls, and the host's render loop drives [`tick`] for timer
/// expiry (and seek-timeout housekeeping). At most one hide deadline is
/// pending at any time; re-arming replaces it.
///
/// [`tick`]: PlaybackController::tick
pub struct PlaybackController<M, C = SystemClock> {
    state: PlaybackState,
    media: M,
    clock: C,
    controls_deadline: Option<Instant>,
    pending_seek: Option<f64>,
    seek_started: Option<Instant>,
    last_failure: Option<PlayerError>,
    listeners: Vec<(u64, Listener)>,
    next_subscription: u64,
}

impl<M: MediaResource> PlaybackController<M> {
    pub fn new(media: M) -> Self {
        Self::with_clock(media, SystemClock)
    }
}

impl<M, C> PlaybackController<M, C>
where
    M: MediaResource,
    C: Clock,
{
    pub fn with_clock(media: M, clock: C) -> Self {
        PlaybackController {
            state: PlaybackState::default(),
            media,
            clock,
            controls_deadline: None,
            pending_seek: None,
            seek_started: None,
            last_failure: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Read-only snapshot for rendering.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The most recent source failure, if the loaded media became unusable.
    pub fn last_failure(&self) -> Option<&PlayerError> {
        self.last_failure.as_ref()
    }

    /// Register for a callback after every completed state change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&PlaybackState) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        SubscriptionId(id)
    }

    /// Remove a listener. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(key, _)| *key != id.0);
        self.listeners.len() != before
    }

    /// Attach a movie's video source, resetting the per-source transport
    /// state. Volume, mute and fullscreen carry over.
    pub fn load(&mut self, movie: MovieRecord) -> Result<()> {
        let url = movie.video_url.clone();
        if let Err(e) = self.media.load(&url) {
            log::error!("failed to load {url}: {e}");
            self.state.is_playing = false;
            self.state.is_buffering = false;
            let failure = PlayerError::from(e);
            self.last_failure = Some(failure.clone());
            self.notify();
            return Err(failure);
        }
        self.state.reset_for_load();
        self.state.current_movie = Some(movie);
        self.last_failure = None;
        self.pending_seek = None;
        self.seek_started = None;
        self.controls_deadline = None;
        self.notify();
        Ok(())
    }

    /// Flip between play and pause.
    ///
    /// `is_playing` is updated optimistically on command acceptance; an
    /// asynchronous refusal would surface later as a lifecycle event. A
    /// synchronous refusal leaves the state on the resource's actual side.
    pub fn toggle_play(&mut self) -> Result<()> {
        let target = !self.state.is_playing;
        let result = if target {
            self.media.play()
        } else {
            self.media.pause()
        };
        if let Err(e) = result {
            log::warn!(
                "{} rejected: {e}",
                if target { "play" } else { "pause" }
            );
            return Err(e.into());
        }
        self.state.is_playing = target;
        self.state.show_controls = true;
        if target {
            self.arm_controls_timer();
        } else {
            self.controls_deadline = None;
        }
        self.notify();
        Ok(())
    }

    /// Seek to a fraction of the progress bar, clamped to `[0, 1]`.
    pub fn seek(&mut self, fraction: f64) -> Result<()> {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            log::warn!("ignoring non-finite seek fraction");
            return Ok(());
        };
        let target = fraction * self.state.duration;
        self.issue_seek(target)
    }

    /// Skip forward or backward by `delta` seconds, clamped to the source.
    pub fn skip_by(&mut self, delta: f64) -> Result<()> {
        if !delta.is_finite() {
            log::warn!("ignoring non-finite skip delta");
            return Ok(());
        }
        let target =
            (self.state.current_time + delta).clamp(0.0, self.state.duration);
        self.issue_seek(target)
    }

    fn issue_seek(&mut self, target: f64) -> Result<()> {
        if let Err(e) = self.media.seek(target) {
            log::warn!("seek to {target:.2}s rejected: {e}");
            return Err(e.into());
        }
        log::debug!("seek initiated, position set to {target:.2}s");
        // Optimistic: show the target immediately rather than waiting for the
        // next position report. Only the latest in-flight seek is tracked.
        self.state.current_time = target;
        self.pending_seek = Some(target);
        self.seek_started = Some(self.clock.now());
        self.state.show_controls = true;
        if self.state.is_playing {
            self.arm_controls_timer();
        }
        self.notify();
        Ok(())
    }

    /// Set the output volume, clamped to `[0, 1]`. Zero implies muted and
    /// any positive level implies unmuted; the stored level itself is
    /// otherwise independent of mute.
    pub fn set_volume(&mut self, volume: f64) -> Result<()> {
        if !volume.is_finite() {
            log::warn!("ignoring non-finite volume");
            return Ok(());
        }
        let volume = volume.clamp(0.0, 1.0);
        self.media.set_volume(volume)?;
        self.state.volume = volume;
        self.state.is_muted = volume == 0.0;
        self.notify();
        Ok(())
    }

    /// Flip mute without touching the stored volume level.
    pub fn toggle_mute(&mut self) -> Result<()> {
        let muted = !self.state.is_muted;
        self.media.set_muted(muted)?;
        self.state.is_muted = muted;
        self.notify();
        Ok(())
    }

    /// Select a playback rate from [`PLAYBACK_RATES`]. Any other value is
    /// rejected with no state change.
    pub fn set_playback_rate(&mut self, rate: f64) -> Result<()> {
        if !PLAYBACK_RATES.contains(&rate) {
            return Err(PlayerError::InvalidRate(rate));
        }
        self.media.set_rate(rate)?;
        self.state.playback_rate = rate;
        self.notify();
        Ok(())
    }

    /// Request the opposite fullscreen mode from the environment.
    ///
    /// Deliberately does not touch `is_fullscreen`: that field tracks the
    /// environment's confirmation ([`MediaEvent::FullscreenChanged`]), which
    /// may arrive late or not at all.
    pub fn toggle_fullscreen(&mut self) -> Result<()> {
        let result = if self.state.is_fullscreen {
            self.media.exit_fullscreen()
        } else {
            self.media.request_fullscreen()
        };
        result.map_err(|e| {
            log::warn!("fullscreen request rejected: {e}");
            e.into()
        })
    }

    /// Pointer moved over the player surface; keeps the controls up.
    pub fn pointer_moved(&mut self) {
        if self.state.is_playing {
            self.state.show_controls = true;
            self.arm_controls_timer();
            self.notify();
        }
    }

    /// Periodic housekeeping, driven from the host's render cadence: hides
    /// the controls once the deadline passes and expires stale seeks.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.expire_stale_seek(now);
        if let Some(deadline) = self.controls_deadline {
            if self.state.is_playing
                && !self.state.is_buffering
                && now >= deadline
            {
                self.state.show_controls = false;
                self.controls_deadline = None;
                self.notify();
            }
        }
    }

    /// Fold a media lifecycle event into the state. Events are processed in
    /// delivery order and never coalesced.
    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataLoaded { duration } => {
                if !duration.is_finite() || duration < 0.0 {
                    log::warn!("ignoring invalid duration {duration}");
                    return;
                }
                if self.state.duration != 0.0 {
                    // Duration is fixed once known for this source.
                    return;
                }
                log::debug!("duration available: {duration}s");
                self.state.duration = duration;
                self.notify();
            }

            MediaEvent::TimeUpdate { position } => {
                let now = self.clock.now();
                self.expire_stale_seek(now);
                if let Some(target) = self.pending_seek {
                    if (position - target).abs() <= SEEK_CONFIRM_EPSILON {
                        self.pending_seek = None;
                        self.seek_started = None;
                    } else {
                        // Report from before the seek landed; the optimistic
                        // position stays authoritative until confirmation or
                        // timeout.
                        log::debug!(
                            "time update {position:.2}s during seek to {target:.2}s, ignoring"
                        );
                        return;
                    }
                }
                // Out-of-range reports are propagated as-is; the resource is
                // the source of truth even when it misbehaves.
                self.state.current_time = position;
                if self.state.is_playing {
                    self.arm_controls_timer();
                }
                self.notify();
            }

            MediaEvent::Waiting => {
                self.state.is_buffering = true;
                self.state.show_controls = true;
                self.controls_deadline = None;
                self.notify();
            }

            MediaEvent::Playing => {
                self.state.is_buffering = false;
                if self.state.is_playing {
                    self.arm_controls_timer();
                }
                self.notify();
            }

            MediaEvent::Ended => {
                log::info!("end of stream");
                self.state.is_playing = false;
                self.state.is_buffering = false;
                self.state.show_controls = true;
                self.controls_deadline = None;
                self.pending_seek = None;
                self.seek_started = None;
                // Position is preserved so the viewer can review or restart.
                self.notify();
            }

            MediaEvent::FullscreenChanged { fullscreen } => {
                self.state.is_fullscreen = fullscreen;
                self.notify();
            }

            MediaEvent::SourceFailed { reason } => {
                log::error!("media source failed: {reason}");
                self.state.is_playing = false;
                self.state.is_buffering = false;
                self.state.show_controls = true;
                self.controls_deadline = None;
                self.last_failure =
                    Some(PlayerError::ResourceUnavailable(reason));
                self.notify();
            }
        }
    }

    fn arm_controls_timer(&mut self) {
        self.controls_deadline = Some(self.clock.now() + CONTROLS_HIDE_AFTER);
    }

    fn expire_stale_seek(&mut self, now: Instant) {
        if let Some(started) = self.seek_started {
            if now.duration_since(started) > SEEK_CONFIRM_TIMEOUT {
                log::warn!("seek confirmation timed out, accepting reports again");
                self.pending_seek = None;
                self.seek_started = None;
            }
        }
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }
}

impl<M, C> Drop for PlaybackController<M, C> {
    fn drop(&mut self) {
        // Unmount: no deadline may fire into a destroyed view and no
        // listener may outlive the instance.
        self.controls_deadline = None;
        self.listeners.clear();
    }
}

impl<M, C> fmt::Debug for PlaybackController<M, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("controls_deadline", &self.controls_deadline)
            .field("pending_seek", &self.pending_seek)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
