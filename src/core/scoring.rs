use crate::models::{ScoringWeights, VendorCandidate};

/// Calculate the composite match score (0-100) for a reachable candidate
///
/// Scoring formula (weights in percentage points, defaults in brackets):
///
/// ```text
/// skill        = skill_fraction * w.skill            [40]
/// distance     = max(0, w.distance - distance * 2)   [25]
/// rating       = (rating / 5) * w.rating             [20]
/// verification = verified ? w.verified : w.unverified [10 / 5]
/// availability = available ? w.available : w.busy     [5 / 2]
/// ```
///
/// The sum is clamped to [0, 100] and rounded to an integer percentage.
/// `skill_fraction` may exceed 1 when a vendor has more matching skills
/// than the order has requirements; the clamp absorbs that.
pub fn calculate_match_score(
    candidate: &VendorCandidate,
    matching_skills: usize,
    required_count: usize,
    distance_km: f64,
    weights: &ScoringWeights,
) -> u8 {
    let skill_fraction = matching_skills as f64 / required_count as f64;
    let skill_score = skill_fraction * weights.skill;

    // Linear decay, zero from (w.distance / 2) km outward.
    let distance_score = (weights.distance - distance_km * 2.0).max(0.0);

    let rating_score = (candidate.rating.clamp(0.0, 5.0) / 5.0) * weights.rating;

    let verification_score = if candidate.is_verified {
        weights.verified
    } else {
        weights.unverified
    };

    // Busy and unknown availability score alike; any busy note is opaque.
    let availability_score = if candidate.availability.is_available() {
        weights.available
    } else {
        weights.busy
    };

    let total =
        skill_score + distance_score + rating_score + verification_score + availability_score;

    total.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, GeoPoint, VehicleClass};

    fn candidate(rating: f64, is_verified: bool, availability: Availability) -> VendorCandidate {
        VendorCandidate {
            vendor_id: "v1".to_string(),
            display_name: "Cool Air AC Services".to_string(),
            business_name: "Cool Air".to_string(),
            location: GeoPoint::new(17.4065, 78.4691),
            skills: vec!["AC Gas Filling".to_string()],
            rating,
            total_reviews: 120,
            is_verified,
            availability,
            is_mobile: false,
            travel_radius_km: None,
            vehicle: VehicleClass::None,
            is_currently_traveling: false,
        }
    }

    #[test]
    fn test_perfect_nearby_candidate() {
        // Full skill overlap at zero distance: 40 + 25 + 18.8 + 10 + 5 = 98.8
        let c = candidate(4.7, true, Availability::Available);
        let score = calculate_match_score(&c, 1, 1, 0.0, &ScoringWeights::default());
        assert_eq!(score, 99);
    }

    #[test]
    fn test_distance_decay_reaches_zero() {
        let c = candidate(0.0, false, Availability::Unknown);
        let weights = ScoringWeights::default();

        // 25 - 12.5 * 2 = 0; further out stays at 0 instead of going negative.
        let at_cutoff = calculate_match_score(&c, 0, 1, 12.5, &weights);
        let beyond = calculate_match_score(&c, 0, 1, 14.0, &weights);
        assert_eq!(at_cutoff, beyond);
    }

    #[test]
    fn test_score_clamped_at_100() {
        // Three matching skills against one requirement: fraction 3.0,
        // raw total 120 + 25 + 20 + 10 + 5; clamp keeps it at 100.
        let c = candidate(5.0, true, Availability::Available);
        let score = calculate_match_score(&c, 3, 1, 0.0, &ScoringWeights::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_verified_beats_unverified() {
        let verified = candidate(4.0, true, Availability::Available);
        let unverified = candidate(4.0, false, Availability::Available);
        let weights = ScoringWeights::default();

        let v = calculate_match_score(&verified, 1, 1, 2.0, &weights);
        let u = calculate_match_score(&unverified, 1, 1, 2.0, &weights);
        assert!(v > u);
    }

    #[test]
    fn test_busy_and_unknown_score_alike() {
        let busy = candidate(4.0, true, Availability::Busy("until 3 PM".to_string()));
        let unknown = candidate(4.0, true, Availability::Unknown);
        let weights = ScoringWeights::default();

        assert_eq!(
            calculate_match_score(&busy, 1, 1, 2.0, &weights),
            calculate_match_score(&unknown, 1, 1, 2.0, &weights)
        );
    }

    #[test]
    fn test_out_of_range_rating_is_clamped() {
        let c = candidate(7.5, true, Availability::Available);
        let capped = candidate(5.0, true, Availability::Available);
        let weights = ScoringWeights::default();

        assert_eq!(
            calculate_match_score(&c, 1, 1, 3.0, &weights),
            calculate_match_score(&capped, 1, 1, 3.0, &weights)
        );
    }
}
