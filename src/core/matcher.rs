use thiserror::Error;

use crate::core::{
    distance::{haversine_distance, round_km},
    eta::estimate_arrival,
    filters::{can_reach_customer, matching_skill_count, passes_inclusion_rule, GENERAL_SERVICE},
    scoring::calculate_match_score,
};
use crate::models::{MatchConfig, OrderRequest, VendorCandidate, VendorMatch};

/// Errors the matcher can raise
///
/// Everything except malformed coordinates is a normal outcome expressed
/// as an empty result list, so a single variant suffices.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Vendor matching orchestrator
///
/// # Pipeline stages
/// 1. Coordinate validation
/// 2. Distance computation and reachability gate
/// 3. Skill matching and composite scoring
/// 4. Inclusion rule, ranking (mobile first), truncation
///
/// Pure and deterministic: no I/O, no shared state, identical inputs
/// produce identical output. Safe to call concurrently for independent
/// orders.
#[derive(Debug, Clone)]
pub struct VendorMatcher {
    config: MatchConfig,
}

impl VendorMatcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank vendor candidates for an order
    ///
    /// Candidates outside their travel radius (mobile) or the flat reach
    /// threshold (fixed-location) are dropped before scoring. Survivors are
    /// kept when they match at least one required skill or clear the fuzzy
    /// score floor, sorted mobile-first then by score, and truncated to the
    /// configured cap. Empty candidate lists and all-filtered-out runs both
    /// return an empty vector, not an error.
    ///
    /// # Errors
    /// `MatchError::InvalidInput` when the order or any candidate carries
    /// non-finite or out-of-range coordinates.
    pub fn match_vendors(
        &self,
        order: &OrderRequest,
        candidates: &[VendorCandidate],
    ) -> Result<Vec<VendorMatch>, MatchError> {
        self.match_vendors_with(order, candidates, &self.config)
    }

    /// Same as [`match_vendors`](Self::match_vendors) with per-call tunables.
    pub fn match_vendors_with(
        &self,
        order: &OrderRequest,
        candidates: &[VendorCandidate],
        config: &MatchConfig,
    ) -> Result<Vec<VendorMatch>, MatchError> {
        if !order.customer_location.is_valid() {
            return Err(MatchError::InvalidInput(format!(
                "order {} has malformed customer coordinates ({}, {})",
                order.order_id, order.customer_location.lat, order.customer_location.lng
            )));
        }
        if let Some(bad) = candidates.iter().find(|c| !c.location.is_valid()) {
            return Err(MatchError::InvalidInput(format!(
                "vendor {} has malformed coordinates ({}, {})",
                bad.vendor_id, bad.location.lat, bad.location.lng
            )));
        }

        // Orders without requirements fall back to a baseline sentinel so
        // the skill fraction stays well-defined.
        let sentinel = [GENERAL_SERVICE.to_string()];
        let required: &[String] = if order.required_skills.is_empty() {
            &sentinel
        } else {
            &order.required_skills
        };

        let mut matches: Vec<VendorMatch> = candidates
            .iter()
            .filter_map(|candidate| {
                let distance_km =
                    haversine_distance(order.customer_location, candidate.location);

                if !can_reach_customer(candidate, distance_km, config) {
                    return None;
                }

                let matching_skills = matching_skill_count(&candidate.skills, required);
                let match_score_percent = calculate_match_score(
                    candidate,
                    matching_skills,
                    required.len(),
                    distance_km,
                    &config.weights,
                );

                if !passes_inclusion_rule(matching_skills, match_score_percent) {
                    return None;
                }

                Some(VendorMatch {
                    vendor_id: candidate.vendor_id.clone(),
                    display_name: candidate.display_name.clone(),
                    business_name: candidate.business_name.clone(),
                    distance_km: round_km(distance_km),
                    match_score_percent,
                    estimated_arrival: estimate_arrival(candidate, distance_km),
                    can_reach_customer: true,
                    rating: candidate.rating,
                    total_reviews: candidate.total_reviews,
                    is_verified: candidate.is_verified,
                    is_mobile: candidate.is_mobile,
                })
            })
            .collect();

        // Mobile vendors rank ahead of fixed-location vendors regardless of
        // score; within each group, score descending. The sort is stable,
        // ties keep input order.
        matches.sort_by(|a, b| {
            b.is_mobile
                .cmp(&a.is_mobile)
                .then(b.match_score_percent.cmp(&a.match_score_percent))
        });

        matches.truncate(config.max_results);

        Ok(matches)
    }
}

impl Default for VendorMatcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}
