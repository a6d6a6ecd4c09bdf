//! Fixed query window.

use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDate, TimeZone};

/// Number of whole years before the current one covered by a query.
pub const YEARS_BACK: i32 = 2;

/// EventKit silently truncates predicates spanning more than four years.
pub const HOST_MAX_SPAN_YEARS: i32 = 4;

/// Span of time a query covers: `[start, end)` in the host time zone.
///
/// Runs from Jan 1 00:00:00 of `year - 2` to Dec 31 23:59:59 of `year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl QueryWindow {
    /// Window ending with the current year.
    pub fn current() -> Self {
        Self::ending_in_year(Local::now().year())
    }

    /// Window ending with `year`.
    ///
    /// Years outside chrono's calendar are clamped, keeping a year of margin
    /// on each side for zone offsets.
    pub fn ending_in_year(year: i32) -> Self {
        const _: () = assert!(YEARS_BACK < HOST_MAX_SPAN_YEARS);

        let year = year.clamp(
            NaiveDate::MIN.year() + YEARS_BACK + 1,
            NaiveDate::MAX.year() - 1,
        );

        QueryWindow {
            start: local_instant(year - YEARS_BACK, 1, 1, 0, 0, 0),
            end: local_instant(year, 12, 31, 23, 59, 59),
        }
    }

    pub fn contains(&self, instant: &DateTime<Local>) -> bool {
        *instant >= self.start && *instant < self.end
    }
}

/// Resolve a wall-clock time in the host zone, stepping forward out of a gap.
fn local_instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Local> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        // unreachable: callers pass valid wall times in a clamped year
        .unwrap_or_default();

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Zones that skip midnight (DST at 00:00) have no such wall time.
        LocalResult::None => Local
            .from_local_datetime(&(naive + chrono::TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(|| naive.and_utc().with_timezone(&Local)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_spans_two_prior_years() {
        let window = QueryWindow::ending_in_year(2024);

        assert_eq!(window.start.naive_local().to_string(), "2022-01-01 00:00:00");
        assert_eq!(window.end.naive_local().to_string(), "2024-12-31 23:59:59");
    }

    #[test]
    fn test_window_stays_within_host_limit() {
        let window = QueryWindow::ending_in_year(2024);
        let span = window.end - window.start;

        assert!(span < chrono::TimeDelta::days(365 * HOST_MAX_SPAN_YEARS as i64));
        assert!(span > chrono::TimeDelta::days(365 * (YEARS_BACK as i64 + 1) - 1));
    }

    #[test]
    fn test_current_window_contains_now() {
        let window = QueryWindow::current();
        assert!(window.contains(&Local::now()));
        assert_eq!(window.end.year(), Local::now().year());
    }

    #[test]
    fn test_out_of_range_years_are_clamped() {
        let late = QueryWindow::ending_in_year(i32::MAX);
        assert_eq!(late.end.naive_local().year(), NaiveDate::MAX.year() - 1);
        assert_eq!(late.end.naive_local().month(), 12);

        let early = QueryWindow::ending_in_year(i32::MIN);
        assert_eq!(early.start.naive_local().year(), NaiveDate::MIN.year() + 1);
        assert!(early.start < early.end);
    }

    #[test]
    fn test_contains_is_half_open() {
        let window = QueryWindow::ending_in_year(2024);
        assert!(window.contains(&window.start));
        assert!(!window.contains(&window.end));
    }
}
