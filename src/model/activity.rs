use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// GPS/motion sample captured under an attendance record. Latitude and
/// longitude are always present; altitude, heading and the acceleration axes
/// depend on what the capturing device provided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityData {
    pub activity_id: String,
    pub record_id: String,
    pub employee_id: String,
    pub record_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
    pub heading: Option<f64>,
    pub acceleration_x: Option<f64>,
    pub acceleration_y: Option<f64>,
    pub acceleration_z: Option<f64>,
    #[schema(example = "walking")]
    pub activity_type: String,
    pub is_synced: bool,
    pub created_at: String,
}
