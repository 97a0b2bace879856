use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// HR-sheet shape persisted in the `employees` table.
///
/// Field names are camelCase on the wire and double as the sheet's header
/// columns. The hire date is a calendar date only; writing it to a sheet
/// truncates any time-of-day component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeId": "emp100",
        "name": "Hanako Sato",
        "phone": "090-1234-5678",
        "email": "hanako.sato@example.com",
        "department": "Field Operations",
        "position": "Surveyor",
        "hireDate": "2024-04-01"
    })
)]
pub struct StaffRecord {
    pub employee_id: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub department: String,
    pub position: String,
    #[schema(example = "2024-04-01", format = "date", value_type = String)]
    pub hire_date: Option<NaiveDate>,
}
