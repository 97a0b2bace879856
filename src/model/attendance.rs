use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One check-in/check-out cycle against a work area.
///
/// `check_out_time` stays null while the record is open and `sync_time`
/// stays null until an offline entry has been uploaded; nothing in the query
/// surface transitions either field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub record_id: String,
    pub employee_id: String,
    pub check_in_time: String,
    pub check_out_time: Option<String>,
    pub work_area_id: String,
    pub is_offline_entry: bool,
    pub sync_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
