//! Wall-clock access. Requires a browser environment for a real reading.

/// Current time as an ISO-8601 string (e.g. `2024-06-01T12:00:00.000Z`).
/// Empty outside a browser; callers that need determinism pass their own
/// timestamps instead.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
