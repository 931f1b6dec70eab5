use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic coordinate in degrees (WGS84-like).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and within valid coordinate ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// An order being assigned to a vendor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderRequest {
    #[validate(length(min = 1))]
    #[serde(rename = "orderId")]
    pub order_id: String,
    #[serde(rename = "requiredSkills", default)]
    pub required_skills: Vec<String>,
    #[serde(rename = "customerLocation")]
    pub customer_location: GeoPoint,
}

/// Vendor availability as reported by the vendor directory.
///
/// Any busy note ("Busy until 3 PM") is opaque free text; unknown
/// availability is scored the same as busy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy(String),
    Unknown,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::Unknown
    }
}

/// Vehicle class of a mobile vendor, used only for ETA estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Bike,
    Car,
    Van,
    None,
}

impl VehicleClass {
    /// Travel minutes per kilometre. Cars and vans are assumed faster
    /// through city traffic than two-wheelers or vendors on foot.
    pub fn minutes_per_km(&self) -> u32 {
        match self {
            VehicleClass::Car | VehicleClass::Van => 3,
            _ => 4,
        }
    }
}

impl Default for VehicleClass {
    fn default() -> Self {
        VehicleClass::None
    }
}

/// Vendor candidate supplied per call by the vendor directory
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VendorCandidate {
    #[validate(length(min = 1))]
    #[serde(rename = "vendorId")]
    pub vendor_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "businessName", default)]
    pub business_name: String,
    pub location: GeoPoint,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "totalReviews", default)]
    pub total_reviews: u32,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(default)]
    pub availability: Availability,
    #[serde(rename = "isMobile", default)]
    pub is_mobile: bool,
    #[serde(rename = "travelRadiusKm", default)]
    pub travel_radius_km: Option<f64>,
    #[serde(default)]
    pub vehicle: VehicleClass,
    #[serde(rename = "isCurrentlyTraveling", default)]
    pub is_currently_traveling: bool,
}

/// One ranked vendor in the assignment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorMatch {
    #[serde(rename = "vendorId")]
    pub vendor_id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "matchScorePercent")]
    pub match_score_percent: u8,
    #[serde(rename = "estimatedArrival")]
    pub estimated_arrival: String,
    #[serde(rename = "canReachCustomer")]
    pub can_reach_customer: bool,
    pub rating: f64,
    #[serde(rename = "totalReviews")]
    pub total_reviews: u32,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    #[serde(rename = "isMobile")]
    pub is_mobile: bool,
}

/// Scoring weights for the composite match score
///
/// Weights are expressed in percentage points; a perfect candidate
/// (full skill overlap, zero distance, 5.0 rating, verified, available)
/// totals 100 at the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_rating_weight")]
    pub rating: f64,
    #[serde(default = "default_verified_weight")]
    pub verified: f64,
    #[serde(default = "default_unverified_weight")]
    pub unverified: f64,
    #[serde(default = "default_available_weight")]
    pub available: f64,
    #[serde(default = "default_busy_weight")]
    pub busy: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            distance: default_distance_weight(),
            rating: default_rating_weight(),
            verified: default_verified_weight(),
            unverified: default_unverified_weight(),
            available: default_available_weight(),
            busy: default_busy_weight(),
        }
    }
}

fn default_skill_weight() -> f64 { 40.0 }
fn default_distance_weight() -> f64 { 25.0 }
fn default_rating_weight() -> f64 { 20.0 }
fn default_verified_weight() -> f64 { 10.0 }
fn default_unverified_weight() -> f64 { 5.0 }
fn default_available_weight() -> f64 { 5.0 }
fn default_busy_weight() -> f64 { 2.0 }

/// Tunables for a single matching run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(rename = "maxResults", default = "default_max_results")]
    pub max_results: usize,
    #[serde(rename = "fixedLocationReachKm", default = "default_fixed_reach_km")]
    pub fixed_location_reach_km: f64,
    #[serde(
        rename = "defaultMobileTravelRadiusKm",
        default = "default_mobile_radius_km"
    )]
    pub default_mobile_travel_radius_km: f64,
    #[serde(default)]
    pub weights: ScoringWeights,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            fixed_location_reach_km: default_fixed_reach_km(),
            default_mobile_travel_radius_km: default_mobile_radius_km(),
            weights: ScoringWeights::default(),
        }
    }
}

fn default_max_results() -> usize { 6 }
fn default_fixed_reach_km() -> f64 { 15.0 }
fn default_mobile_radius_km() -> f64 { 10.0 }
