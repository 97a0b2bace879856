use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Circular work-area boundary, persisted in the `areas` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "a1",
        "name": "North",
        "center": { "lat": 35.1, "lng": 139.1 },
        "radius": 50.0,
        "description": "",
        "color": "#fff"
    })
)]
pub struct CircularGeoFence {
    pub id: String,
    pub name: String,
    pub center: LatLng,
    /// Meters.
    pub radius: f64,
    pub description: String,
    pub color: String,
}
