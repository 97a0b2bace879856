use crate::model::activity::ActivityData;
use crate::model::attendance::AttendanceRecord;
use crate::model::employee::Employee;
use crate::model::geofence::{CircularGeoFence, LatLng};
use crate::model::punch::{Punch, PunchStatus};
use crate::model::report::{DailyReport, ToolUsage};
use crate::model::staff_record::StaffRecord;
use crate::model::task::Task;
use crate::model::tool::Tool;
use crate::model::work_area::WorkArea;
use crate::models::{
    ApiResponse, AreaListResponse, CommandRequest, LoginResponse, MutationResponse,
    StaffListResponse, StaffResponse, TokenCheckResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Field Workforce Tracking API",
        version = "1.0.0",
        description = r#"
## Field Workforce Tracking API

Action-dispatched HTTP facade over a field-workforce tracking prototype.

### 🔹 Surfaces
- **Query** — `GET /exec?action=...` serves attendance, GPS activity,
  employees, work areas, geofences, punches, tasks, reports and tools,
  optionally filtered by `employee_id`
- **Command** — `POST /exec` with a JSON body carrying `action` handles
  login/token checks and employee / work-area CRUD against sheet-backed
  tables

### 🔐 Security
`login` exchanges a credential pair for an opaque token; mutating commands
carry that token in the request **body** (not an Authorization header) and
are verified against the issued-token registry.

### 📦 Response Format
Every response is HTTP 200. The query surface wraps results in
`{success, data?, error?, timestamp}`; commands answer
`{success, ...payload}`.

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::query::exec_query,
        crate::api::command::exec_command
    ),
    components(
        schemas(
            ApiResponse,
            CommandRequest,
            LoginResponse,
            TokenCheckResponse,
            MutationResponse,
            StaffListResponse,
            StaffResponse,
            AreaListResponse,
            Employee,
            StaffRecord,
            WorkArea,
            CircularGeoFence,
            LatLng,
            AttendanceRecord,
            ActivityData,
            Punch,
            PunchStatus,
            Task,
            Tool,
            DailyReport,
            ToolUsage
        )
    ),
    tags(
        (name = "Query", description = "Read-only fixture queries"),
        (name = "Command", description = "Auth and sheet-backed CRUD commands"),
    )
)]
pub struct ApiDoc;
