use crate::model::activity::ActivityData;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ToolUsage {
    pub tool_id: String,
    pub hours: f64,
}

/// Daily field report: tool usage plus the activity samples recorded that
/// day. Served both per-employee and on the admin roll-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyReport {
    pub report_id: String,
    pub employee_id: String,
    pub report_date: String,
    pub tool_usage: Vec<ToolUsage>,
    pub activities: Vec<ActivityData>,
    pub notes: Option<String>,
}
