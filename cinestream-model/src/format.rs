use crate::error::{ModelError, Result};

/// Format a duration in seconds as `m:ss`, or `h:mm:ss` past the hour mark.
///
/// Zero, negative and non-finite inputs all render as `0:00` so a player can
/// display a placeholder before metadata arrives.
pub fn format_duration(total_seconds: f64) -> String {
    if !total_seconds.is_finite() || total_seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = total_seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Parse an `mm:ss` timestamp into total seconds.
pub fn timestamp_to_seconds(timestamp: &str) -> Result<u32> {
    let (minutes, seconds) = timestamp
        .split_once(':')
        .ok_or_else(|| ModelError::InvalidTimestamp(timestamp.to_string()))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| ModelError::InvalidTimestamp(timestamp.to_string()))?;
    let seconds: u32 = seconds
        .parse()
        .map_err(|_| ModelError::InvalidTimestamp(timestamp.to_string()))?;
    if seconds >= 60 {
        return Err(ModelError::InvalidTimestamp(timestamp.to_string()));
    }
    Ok(minutes * 60 + seconds)
}

/// Playback progress as a fraction clamped to `[0, 1]`.
pub fn progress_fraction(current: f64, total: f64) -> f64 {
    if !current.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    (current / total).clamp(0.0, 1.0)
}
