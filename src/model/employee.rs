use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Domain-shaped employee as carried by the read-only query surface.
///
/// Distinct from [`crate::model::staff_record::StaffRecord`], the camelCase
/// HR-sheet shape persisted in the `employees` table; the two schemas coexist
/// in the wire contract and are deliberately not conflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "emp001",
        "name": "John Doe",
        "email": "john.doe@example.com",
        "phone_number": "123-456-7890",
        "assigned_area": "area001",
        "is_active": true,
        "created_at": "2024-06-01T09:00:00.000Z",
        "updated_at": "2024-06-01T09:00:00.000Z"
    })
)]
pub struct Employee {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub assigned_area: Option<String>,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}
