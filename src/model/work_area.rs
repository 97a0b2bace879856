use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Polygonal work area as served by the query surface. Coordinates are an
/// ordered sequence of `[lat, lng]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkArea {
    pub area_id: String,
    pub area_name: String,
    pub coordinates: Vec<[f64; 2]>,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
