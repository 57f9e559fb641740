use super::*;

// -----------------------------------------------------------------------
// parse_tier_range
// -----------------------------------------------------------------------

#[test]
fn tier_range_plain() {
    assert_eq!(parse_tier_range("0-50 km"), (0, 50));
}

#[test]
fn tier_range_spaces_around_hyphen() {
    assert_eq!(parse_tier_range("51 - 100 km"), (51, 100));
}

#[test]
fn tier_range_with_prefix_text() {
    assert_eq!(parse_tier_range("Airport 101-200km"), (101, 200));
}

#[test]
fn tier_range_first_pair_wins() {
    assert_eq!(parse_tier_range("0-50 km / 10-20 min"), (0, 50));
}

#[test]
fn tier_range_missing_defaults() {
    assert_eq!(parse_tier_range("Daily Rental - Full Day"), DEFAULT_TIER_RANGE);
    assert_eq!(parse_tier_range("Default Title"), DEFAULT_TIER_RANGE);
    assert_eq!(parse_tier_range(""), DEFAULT_TIER_RANGE);
}

#[test]
fn tier_range_overflow_defaults() {
    assert_eq!(parse_tier_range("0-99999999999 km"), DEFAULT_TIER_RANGE);
}

// -----------------------------------------------------------------------
// classify_unit_title
// -----------------------------------------------------------------------

#[test]
fn classify_distance_bracket() {
    assert_eq!(classify_unit_title("0-50 km"), UnitKind::Distance);
    assert_eq!(classify_unit_title("Default Title"), UnitKind::Distance);
}

#[test]
fn classify_half_day() {
    assert_eq!(
        classify_unit_title("Daily Rental - Half Day"),
        UnitKind::HalfDayRental
    );
    assert_eq!(
        classify_unit_title("HALF-DAY (daily rental)"),
        UnitKind::HalfDayRental
    );
}

#[test]
fn classify_full_day() {
    assert_eq!(
        classify_unit_title("Daily Rental - Full Day"),
        UnitKind::FullDayRental
    );
    assert_eq!(
        classify_unit_title("daily rental full-day"),
        UnitKind::FullDayRental
    );
}

#[test]
fn day_or_rental_wording_alone_stays_distance() {
    for title in [
        "Day Trip 101-200 km",
        "Holiday Route 101-200 km",
        "Car Rental 0-50 km",
        "Full Day",
        "Half Day",
        "Rental",
    ] {
        assert_eq!(classify_unit_title(title), UnitKind::Distance, "{title}");
    }
}

#[test]
fn daily_rental_without_period_stays_distance() {
    assert_eq!(classify_unit_title("Daily Rental"), UnitKind::Distance);
}

// -----------------------------------------------------------------------
// parse_numeric_id
// -----------------------------------------------------------------------

#[test]
fn numeric_id_from_global_id() {
    assert_eq!(parse_numeric_id("gid://shopify/Product/8123456789"), 8_123_456_789);
}

#[test]
fn numeric_id_ignores_query_suffix() {
    assert_eq!(
        parse_numeric_id("gid://shopify/ProductVariant/44?cart=1"),
        44
    );
}

#[test]
fn numeric_id_fails_soft_to_zero() {
    assert_eq!(parse_numeric_id("gid://shopify/Product/abc"), 0);
    assert_eq!(parse_numeric_id(""), 0);
    assert_eq!(parse_numeric_id("gid://shopify/Product/"), 0);
}
