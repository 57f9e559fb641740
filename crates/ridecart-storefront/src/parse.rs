//! String parsing for unit titles and global ids.
//!
//! Unit titles are free text typed by merchandisers, so every parser here is
//! total: unrecognized input maps to a documented default instead of an error.

use std::sync::LazyLock;

use regex::Regex;
use ridecart_core::UnitKind;

/// Range assumed for a unit whose title carries no `"<min>-<max>"` pair.
pub const DEFAULT_TIER_RANGE: (u32, u32) = (0, 50);

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)").expect("valid tier range regex"));

/// Extracts the inclusive kilometre range from a unit title.
///
/// The first two integers joined by a hyphen win, with whitespace allowed
/// around the hyphen: `"0-50 km"`, `"51 - 100 km"`, `"Airport 101-200km"`.
/// Titles without such a pair, or with numbers too large for `u32`, yield
/// [`DEFAULT_TIER_RANGE`].
#[must_use]
pub fn parse_tier_range(title: &str) -> (u32, u32) {
    RANGE_RE
        .captures(title)
        .and_then(|caps| {
            let min = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let max = caps.get(2)?.as_str().parse::<u32>().ok()?;
            Some((min, max))
        })
        .unwrap_or(DEFAULT_TIER_RANGE)
}

/// Decides what a unit sells from its title.
///
/// Case-insensitive. A rental unit must say `"daily rental"` and name its
/// period as `"half day"`/`"half-day"` or `"full day"`/`"full-day"`. Every
/// other title is a distance bracket, including ones that merely mention a
/// day or a rental.
#[must_use]
pub fn classify_unit_title(title: &str) -> UnitKind {
    let lower = title.to_lowercase();
    if !lower.contains("daily rental") {
        return UnitKind::Distance;
    }

    if lower.contains("half day") || lower.contains("half-day") {
        UnitKind::HalfDayRental
    } else if lower.contains("full day") || lower.contains("full-day") {
        UnitKind::FullDayRental
    } else {
        UnitKind::Distance
    }
}

/// Numeric tail of a slash-delimited global id.
///
/// `"gid://shopify/Product/8123456789"` → `8123456789`. Anything that does not
/// end in digits yields `0`.
#[must_use]
pub fn parse_numeric_id(global_id: &str) -> u64 {
    global_id
        .rsplit('/')
        .next()
        .map(|tail| tail.split('?').next().unwrap_or(tail))
        .and_then(|tail| tail.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
