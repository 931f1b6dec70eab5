use crate::models::VendorCandidate;

/// Estimate an arrival window for a reachable candidate
///
/// Presentation only; ETA never influences ranking. Fixed-location vendors
/// get coarse distance bands. Mobile vendors get a per-km travel estimate
/// (cars and vans at 3 min/km, everything else at 4 min/km) widened by a
/// flat 10-minute window, shifted out by another 10 minutes when the vendor
/// is already on the road.
pub fn estimate_arrival(candidate: &VendorCandidate, distance_km: f64) -> String {
    if !candidate.is_mobile {
        return fixed_location_band(distance_km).to_string();
    }

    let travel_min = (distance_km * candidate.vehicle.minutes_per_km() as f64).ceil() as u32;

    if candidate.is_currently_traveling {
        format!(
            "{}-{} mins (currently traveling)",
            travel_min + 10,
            travel_min + 20
        )
    } else {
        format!("{}-{} mins", travel_min, travel_min + 10)
    }
}

#[inline]
fn fixed_location_band(distance_km: f64) -> &'static str {
    if distance_km < 2.0 {
        "20-30 mins"
    } else if distance_km < 5.0 {
        "30-45 mins"
    } else if distance_km < 10.0 {
        "45-60 mins"
    } else {
        "60+ mins"
    }
}
