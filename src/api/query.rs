use crate::api::action::{QueryAction, query_catalog};
use crate::fixtures;
use crate::models::{ApiResponse, QueryParams};
use actix_web::{HttpResponse, Responder, web};
use std::str::FromStr;
use tracing::debug;

/// Query entry point. Dispatches on the `action` query parameter and wraps
/// every outcome, including unknown actions, in the uniform envelope with
/// HTTP 200.
#[utoipa::path(
    get,
    path = "/exec",
    params(
        ("action" = String, Query, description = "Query action name, e.g. getAttendanceData"),
        ("employee_id" = Option<String>, Query, description = "Optional employee filter")
    ),
    responses(
        (status = 200, description = "Envelope with fixture data, or a failure envelope for an unknown action", body = ApiResponse)
    ),
    tag = "Query"
)]
pub async fn exec_query(params: web::Query<QueryParams>) -> impl Responder {
    let Some(raw_action) = params.action.as_deref() else {
        return HttpResponse::Ok().json(ApiResponse::fail(format!(
            "Missing 'action' parameter. Valid actions: {}",
            query_catalog()
        )));
    };

    let action = match QueryAction::from_str(raw_action) {
        Ok(action) => action,
        Err(_) => {
            return HttpResponse::Ok().json(ApiResponse::fail(format!(
                "Unknown action '{}'. Valid actions: {}",
                raw_action,
                query_catalog()
            )));
        }
    };

    let filter = params.employee_id.as_deref();
    debug!(action = %action, employee_id = ?filter, "Dispatching query");

    let response = match action {
        QueryAction::GetAttendanceData => ApiResponse::ok(fixtures::attendance(filter)),
        QueryAction::GetActivityData => ApiResponse::ok(fixtures::activity(filter)),
        QueryAction::GetEmployeeData => ApiResponse::ok(fixtures::employees(filter)),
        QueryAction::GetWorkareaData => ApiResponse::ok(fixtures::work_areas()),
        QueryAction::GetGeofences => ApiResponse::ok(fixtures::geofences()),
        QueryAction::GetPunches => ApiResponse::ok(fixtures::punches(filter)),
        QueryAction::GetTasks => ApiResponse::ok(fixtures::tasks(filter)),
        QueryAction::GetEmployeeReports => ApiResponse::ok(fixtures::employee_reports(filter)),
        QueryAction::GetAdminReports => ApiResponse::ok(fixtures::admin_reports(filter)),
        QueryAction::GetTools => ApiResponse::ok(fixtures::tools()),
    };

    HttpResponse::Ok().json(response)
}
