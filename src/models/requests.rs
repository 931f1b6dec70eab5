use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{MatchConfig, OrderRequest, VendorCandidate};

/// Request to rank vendor candidates for an order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchVendorsRequest {
    #[validate(nested)]
    pub order: OrderRequest,
    #[serde(default)]
    #[validate(nested)]
    pub candidates: Vec<VendorCandidate>,
    /// Per-request tunables; when absent the server configuration applies,
    /// omitted fields inside the object fall back to the documented defaults.
    #[serde(default)]
    pub config: Option<MatchConfig>,
}
