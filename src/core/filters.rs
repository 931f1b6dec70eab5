use crate::models::{MatchConfig, VendorCandidate};

/// Sentinel requirement applied when an order arrives without skills, so
/// every vendor gets a baseline rather than a division by zero.
pub const GENERAL_SERVICE: &str = "General Service";

/// Reachability gate: whether the vendor can physically serve the customer.
///
/// Mobile vendors travel up to their declared radius; fixed-location vendors
/// are assumed reachable within a flat threshold. Both boundaries are
/// inclusive. Vendors failing this gate are never scored or returned.
#[inline]
pub fn can_reach_customer(
    candidate: &VendorCandidate,
    distance_km: f64,
    config: &MatchConfig,
) -> bool {
    if candidate.is_mobile {
        let radius = candidate
            .travel_radius_km
            .unwrap_or(config.default_mobile_travel_radius_km);
        distance_km <= radius
    } else {
        distance_km <= config.fixed_location_reach_km
    }
}

/// Count candidate skills that contain any required skill as a
/// case-insensitive substring.
///
/// Direction matters: the vendor's skill string must contain the
/// requirement, not the other way around. Several skills may match the
/// same requirement and each counts once, so the resulting fraction can
/// exceed 1; the composite score is clamped downstream.
#[inline]
pub fn matching_skill_count(skills: &[String], required: &[String]) -> usize {
    let required_lower: Vec<String> = required.iter().map(|r| r.to_lowercase()).collect();
    skills
        .iter()
        .filter(|skill| {
            let skill_lower = skill.to_lowercase();
            required_lower.iter().any(|req| skill_lower.contains(req))
        })
        .count()
}

/// Inclusion rule applied after reachability: a candidate stays in the
/// result set when it matches at least one required skill, or when its
/// composite score clears the fuzzy-fallback floor. The fallback lets
/// highly rated, verified, nearby vendors surface without an exact
/// skill-string hit.
#[inline]
pub fn passes_inclusion_rule(matching_skills: usize, match_score_percent: u8) -> bool {
    matching_skills > 0 || match_score_percent > 30
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, GeoPoint, VehicleClass};

    fn candidate(is_mobile: bool, travel_radius_km: Option<f64>) -> VendorCandidate {
        VendorCandidate {
            vendor_id: "v1".to_string(),
            display_name: "Vendor".to_string(),
            business_name: "Vendor Co".to_string(),
            location: GeoPoint::new(17.4065, 78.4691),
            skills: vec![],
            rating: 4.0,
            total_reviews: 10,
            is_verified: true,
            availability: Availability::Available,
            is_mobile,
            travel_radius_km,
            vehicle: VehicleClass::Bike,
            is_currently_traveling: false,
        }
    }

    #[test]
    fn test_fixed_vendor_reach_boundary() {
        let config = MatchConfig::default();
        let fixed = candidate(false, None);

        assert!(can_reach_customer(&fixed, 15.0, &config));
        assert!(!can_reach_customer(&fixed, 15.01, &config));
    }

    #[test]
    fn test_mobile_vendor_uses_declared_radius() {
        let config = MatchConfig::default();
        let mobile = candidate(true, Some(15.0));

        assert!(can_reach_customer(&mobile, 12.0, &config));
        assert!(can_reach_customer(&mobile, 15.0, &config));
        assert!(!can_reach_customer(&mobile, 15.1, &config));
    }

    #[test]
    fn test_mobile_vendor_falls_back_to_default_radius() {
        let config = MatchConfig::default();
        let mobile = candidate(true, None);

        assert!(can_reach_customer(&mobile, 10.0, &config));
        assert!(!can_reach_customer(&mobile, 10.5, &config));
    }

    #[test]
    fn test_skill_match_is_case_insensitive_substring() {
        let skills = vec![
            "AC Gas Filling".to_string(),
            "AC Repair".to_string(),
            "Plumbing".to_string(),
        ];
        let required = vec!["ac gas filling".to_string()];

        assert_eq!(matching_skill_count(&skills, &required), 1);
    }

    #[test]
    fn test_skill_match_direction_is_skill_contains_requirement() {
        // "AC" is contained in both AC skills, so both count.
        let skills = vec!["AC Gas Filling".to_string(), "AC Repair".to_string()];
        assert_eq!(matching_skill_count(&skills, &["AC".to_string()]), 2);

        // The requirement is longer than the skill, so nothing matches.
        let skills = vec!["AC".to_string()];
        assert_eq!(
            matching_skill_count(&skills, &["AC Gas Filling".to_string()]),
            0
        );
    }

    #[test]
    fn test_inclusion_rule() {
        assert!(passes_inclusion_rule(1, 0));
        assert!(passes_inclusion_rule(0, 31));
        assert!(!passes_inclusion_rule(0, 30));
        assert!(!passes_inclusion_rule(0, 0));
    }
}
