//! Wall-clock helpers for chat message timestamps.
//!
//! In the browser the clock and the `HH:MM` label come from `js_sys::Date`
//! (local time). Natively the label is computed in UTC so tests stay
//! deterministic.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// `HH:MM` label for a timestamp in milliseconds since the epoch.
pub fn clock_label(timestamp_ms: f64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp_ms));
        format_hm(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let (hours, minutes) = utc_hours_minutes(timestamp_ms);
        format_hm(hours, minutes)
    }
}

/// Zero-padded `HH:MM`.
pub fn format_hm(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

#[cfg(any(test, not(feature = "hydrate")))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn utc_hours_minutes(timestamp_ms: f64) -> (u32, u32) {
    const MS_PER_MINUTE: f64 = 60_000.0;
    const MINUTES_PER_DAY: u64 = 24 * 60;

    let total_minutes = (timestamp_ms.max(0.0) / MS_PER_MINUTE).floor() as u64;
    let minute_of_day = total_minutes % MINUTES_PER_DAY;
    ((minute_of_day / 60) as u32, (minute_of_day % 60) as u32)
}
