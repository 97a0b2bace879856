use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Work assignment: who is assigned, what tools they need, and when the
/// work is scheduled to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub task_id: String,
    pub name: String,
    pub assigned_employee_ids: Vec<String>,
    pub required_tools: Vec<String>,
    pub scheduled_start: String,
    pub work_area_id: String,
}
