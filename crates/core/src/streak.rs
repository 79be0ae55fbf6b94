use chrono::{Days, NaiveDate};

use crate::model::Problem;

/// Longest run of consecutive calendar days covered by `problems`.
///
/// Problems whose date does not parse are skipped. Returns 0 when no date
/// parses.
#[must_use]
pub fn longest_streak(problems: &[Problem]) -> u32 {
    longest_streak_in(problems.iter().filter_map(Problem::solved_on))
}

/// Longest run of consecutive calendar days in `dates`.
///
/// Dates are sorted first. The running streak grows only when a date is
/// exactly one day after the previous one; anything else, including a
/// repeat of the same day, starts a new run of 1.
#[must_use]
pub fn longest_streak_in<I>(dates: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable();

    let mut longest = 1;
    let mut current = 1;
    for pair in dates.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        if prev.checked_add_days(Days::new(1)) == Some(next) {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}
