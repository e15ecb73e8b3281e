use thiserror::Error;
use url::Url;

/// Failure reported by the underlying media implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// The environment refused the command (autoplay policy, fullscreen
    /// denied, ...). The resource is still usable.
    #[error("{0}")]
    Rejected(String),

    /// The source could not be loaded or was lost.
    #[error("{0}")]
    Unavailable(String),
}

/// An addressable, seekable, playable media handle.
///
/// Maps onto a native media element: commands are fire-and-forget from the
/// controller's perspective, with any asynchronous outcome reported later as
/// a [`MediaEvent`]. A synchronous `Err` means the command was refused
/// outright and no state change should be assumed.
pub trait MediaResource {
    fn load(&mut self, url: &Url) -> Result<(), MediaError>;
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self) -> Result<(), MediaError>;
    fn seek(&mut self, seconds: f64) -> Result<(), MediaError>;
    fn set_volume(&mut self, volume: f64) -> Result<(), MediaError>;
    fn set_muted(&mut self, muted: bool) -> Result<(), MediaError>;
    fn set_rate(&mut self, rate: f64) -> Result<(), MediaError>;
    fn request_fullscreen(&mut self) -> Result<(), MediaError>;
    fn exit_fullscreen(&mut self) -> Result<(), MediaError>;
}

/// Lifecycle events emitted by the media resource and its environment,
/// delivered to [`crate::PlaybackController::handle_event`] in arrival order.
///
/// The four vendor-specific fullscreen-change notifications of the native
/// surface are normalized into the single [`MediaEvent::FullscreenChanged`].
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Metadata became available; carries the total duration in seconds.
    MetadataLoaded { duration: f64 },
    /// Playback position advanced, at the resource's own cadence.
    TimeUpdate { position: f64 },
    /// Playback stalled waiting for data.
    Waiting,
    /// Playback resumed after a stall.
    Playing,
    /// Playback reached the end of the source.
    Ended,
    /// The environment confirmed a fullscreen transition. This is ground
    /// truth, not intent: the user may have pressed Escape or the request
    /// may have been denied.
    FullscreenChanged { fullscreen: bool },
    /// The source failed to load or became unavailable.
    SourceFailed { reason: String },
}
