//! Today's date as civil days, from the browser clock.

/// Days since 1970-01-01 in the user's local timezone. Returns 0 outside a
/// browser; callers that need determinism take a day count as a parameter.
pub fn today_days() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        crate::state::loans::days_from_civil(
            i64::from(now.get_full_year()),
            i64::from(now.get_month()) + 1,
            i64::from(now.get_date()),
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}
