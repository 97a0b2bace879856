//! Action discriminators for the two dispatch surfaces. The wire strings
//! are the camelCase renderings of the variants.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Read-only actions dispatched from `GET /exec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum QueryAction {
    GetAttendanceData,
    GetActivityData,
    GetEmployeeData,
    GetWorkareaData,
    GetGeofences,
    GetPunches,
    GetTasks,
    GetEmployeeReports,
    GetAdminReports,
    GetTools,
}

/// Actions dispatched from `POST /exec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum CommandAction {
    Login,
    CheckToken,
    GetEmployees,
    GetAllEmployees,
    GetEmployeeById,
    GetAllWorkareas,
    AddEmployee,
    DeleteEmployee,
    AddWorkarea,
    DeleteWorkarea,
}

pub fn query_catalog() -> String {
    QueryAction::iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn command_catalog() -> String {
    CommandAction::iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ")
}
