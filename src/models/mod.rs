// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, GeoPoint, MatchConfig, OrderRequest, ScoringWeights, VehicleClass,
    VendorCandidate, VendorMatch,
};
pub use requests::MatchVendorsRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchVendorsResponse};
