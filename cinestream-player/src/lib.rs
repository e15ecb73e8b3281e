//! Headless playback controller for Cinestream.
//!
//! [`PlaybackController`] translates user intents (play/pause, seek, volume,
//! rate, fullscreen) into commands on an abstract [`MediaResource`], folds the
//! resource's lifecycle events back into an observable [`PlaybackState`], and
//! runs the 3-second auto-hide countdown for the on-screen controls. It owns
//! no rendering and spawns nothing: the host drives it with discrete calls
//! and a periodic [`PlaybackController::tick`].

pub mod clock;
pub mod controller;
pub mod error;
pub mod media;
pub mod state;

pub use clock::{Clock, SystemClock};
pub use controller::{PlaybackController, SubscriptionId};
pub use error::{PlayerError, Result};
pub use media::{MediaError, MediaEvent, MediaResource};
pub use state::{DEFAULT_VOLUME, PLAYBACK_RATES, PlaybackState};
