//! Output helpers for collector reports
//!
//! Collectors hand back serializable values; these helpers turn them into the
//! text written to stdout.

use serde::Serialize;

use crate::error::FactResult;

/// Render any serializable value as pretty-printed JSON
///
/// This replaces the common pattern:
/// ```rust,ignore
/// let json = serde_json::to_string_pretty(&data).map_err(FactError::from)?;
/// ```
///
/// With simply:
/// ```rust,ignore
/// let json = json_pretty(&data)?;
/// ```
pub fn json_pretty<T: Serialize>(data: &T) -> FactResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render any serializable value as single-line JSON
pub fn json_compact<T: Serialize>(data: &T) -> FactResult<String> {
    Ok(serde_json::to_string(data)?)
}

/// Render with the layout selected on the command line
pub fn render_json<T: Serialize>(data: &T, compact: bool) -> FactResult<String> {
    if compact {
        json_compact(data)
    } else {
        json_pretty(data)
    }
}
