//! Byte-size and relative-time humanization.

use std::time::{Duration, SystemTime};

use humansize::{BINARY, FixedAt, FormatSizeOptions};

const MINUTE: Duration = Duration::from_secs(60);
const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);
const MONTH: Duration = Duration::from_secs(30 * 24 * 60 * 60);
const YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Format a byte count in binary units.
///
/// Counts below 1 KiB are whole bytes (`999 B`); larger counts carry exactly
/// one decimal digit in the largest unit whose value is at least one
/// (`976.6 KiB`, `1.0 GiB`).
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    humansize::format_size(bytes, size_options(binary_unit(bytes)))
}

/// Largest binary unit whose whole-number value is at least one. Picked in
/// integer arithmetic so counts just below a unit boundary stay in the
/// smaller unit.
fn binary_unit(bytes: u64) -> FixedAt {
    let mut scaled = bytes / 1024;
    let mut exp = 0;
    while scaled >= 1024 {
        scaled /= 1024;
        exp += 1;
    }
    match exp {
        0 => FixedAt::Kilo,
        1 => FixedAt::Mega,
        2 => FixedAt::Giga,
        3 => FixedAt::Tera,
        4 => FixedAt::Peta,
        _ => FixedAt::Exa,
    }
}

fn size_options(unit: FixedAt) -> FormatSizeOptions {
    FormatSizeOptions::from(BINARY)
        .decimal_places(1)
        .decimal_zeroes(1)
        .fixed_at(Some(unit))
}

/// Format how long ago `time` was, relative to `now`.
///
/// Unknown times render as `unknown`; times in the future as `just now`.
/// Counts are rounded from the fractional unit value, using 30-day months
/// and 365-day years.
pub fn format_relative_time(time: Option<SystemTime>, now: SystemTime) -> String {
    let Some(time) = time else {
        return "unknown".to_string();
    };
    let elapsed = now.duration_since(time).unwrap_or(Duration::ZERO);
    let hours = elapsed.as_secs_f64() / HOUR.as_secs_f64();

    if elapsed < MINUTE {
        "just now".to_string()
    } else if elapsed < HOUR {
        format!("{:.0} minutes ago", elapsed.as_secs_f64() / MINUTE.as_secs_f64())
    } else if elapsed < DAY {
        format!("{hours:.0} hours ago")
    } else if elapsed < MONTH {
        format!("{:.0} days ago", hours / 24.0)
    } else if elapsed < YEAR {
        format!("{:.0} months ago", hours / 24.0 / 30.0)
    } else {
        format!("{:.0} years ago", hours / 24.0 / 365.0)
    }
}
