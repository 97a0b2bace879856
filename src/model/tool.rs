use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tool {
    pub tool_id: String,
    pub name: String,
    pub category: String,
    pub is_available: bool,
}
