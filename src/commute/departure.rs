use chrono::{DateTime, Days, Duration, Local};

/// Departure timestamp for the given hour on tomorrow's date. The
/// directions service rejects departure times in the past; anchoring to
/// tomorrow keeps the timestamp in the future no matter when a run
/// happens to start.
pub fn departure_tomorrow(hour: u32) -> DateTime<Local> {
    let now = Local::now();
    let tomorrow = now.date_naive() + Days::new(1);
    tomorrow
        .and_hms_opt(hour, 0, 0)
        .and_then(|dt| dt.and_local_timezone(Local).earliest())
        // DST can make a wall-clock hour nonexistent; a day from now is
        // still a valid future departure.
        .unwrap_or(now + Duration::days(1))
}
