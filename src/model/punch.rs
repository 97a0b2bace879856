use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum PunchStatus {
    PunchIn,
    PunchOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Punch {
    pub punch_id: String,
    pub employee_id: String,
    pub status: PunchStatus,
    pub punch_time: String,
    pub work_area_id: String,
}
