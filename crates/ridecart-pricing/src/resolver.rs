use ridecart_core::DistanceTier;

/// Selects the distance tier that prices a trip of `distance_km`.
///
/// Scans in the given order and never sorts:
/// 1. Empty `tiers` → `None` (the only `None` case).
/// 2. Missing, zero, negative or NaN distance → the first tier.
/// 3. Otherwise the first tier whose inclusive range contains the distance.
/// 4. Nothing contains it (longer than every bracket, or in a gap) → the tier
///    with the largest `range_max`, earliest on ties.
#[must_use]
pub fn resolve_tier(tiers: &[DistanceTier], distance_km: Option<f64>) -> Option<&DistanceTier> {
    let first = tiers.first()?;

    let distance = match distance_km {
        Some(d) if d > 0.0 => d,
        _ => return Some(first),
    };

    if let Some(hit) = tiers.iter().find(|t| t.contains(distance)) {
        return Some(hit);
    }

    let top = tiers.iter().fold(first, |best, t| {
        if t.range_max > best.range_max {
            t
        } else {
            best
        }
    });
    tracing::debug!(
        distance_km = distance,
        tier = %top.label,
        "no tier contains trip distance; using top bracket"
    );
    Some(top)
}
