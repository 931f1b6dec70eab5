//! Vendor Match - order-assignment matching service for a home-services marketplace
//!
//! This library ranks vendor candidates for an order using geographic
//! distance, skill overlap, rating, verification, and availability, combined
//! into a weighted composite score. Mobile vendors rank ahead of
//! fixed-location vendors. The matcher is pure and deterministic; candidate
//! data is supplied per call by the external vendor directory.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{distance::haversine_distance, MatchError, VendorMatcher};
pub use models::{
    Availability, GeoPoint, MatchConfig, MatchVendorsRequest, MatchVendorsResponse, OrderRequest,
    ScoringWeights, VehicleClass, VendorCandidate, VendorMatch,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let a = GeoPoint::new(17.4065, 78.4691);
        let b = GeoPoint::new(17.4399, 78.4983);
        assert!(haversine_distance(a, b) > 0.0);
    }
}
