use crate::api::action::{CommandAction, command_catalog};
use crate::auth::handlers as auth_handlers;
use crate::auth::registry::TokenRegistry;
use crate::models::{
    ApiResponse, AreaListResponse, CommandRequest, MutationResponse, StaffListResponse,
    StaffResponse,
};
use crate::store::{areas, sheet::SheetStore, staff};
use actix_web::{HttpResponse, Responder, web};
use std::str::FromStr;
use tracing::{debug, info};

/// Denied or unusable mutating command. Deliberately carries no error text.
fn denied() -> HttpResponse {
    HttpResponse::Ok().json(MutationResponse { success: false })
}

/// Command entry point. The body is parsed from raw bytes so that malformed
/// JSON becomes a failure envelope instead of a framework-level 400; nothing
/// escapes this boundary as a non-200.
#[utoipa::path(
    post,
    path = "/exec",
    request_body = CommandRequest,
    responses(
        (status = 200, description = "Per-command envelope: {success, ...payload}, or the uniform failure envelope for unknown actions and malformed bodies", body = ApiResponse)
    ),
    tag = "Command"
)]
pub async fn exec_command(
    store: web::Data<SheetStore>,
    registry: web::Data<TokenRegistry>,
    body: web::Bytes,
) -> impl Responder {
    let request: CommandRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::Ok().json(ApiResponse::fail(format!("Malformed request body: {e}")));
        }
    };

    let action = match CommandAction::from_str(&request.action) {
        Ok(action) => action,
        Err(_) => {
            return HttpResponse::Ok().json(ApiResponse::fail(format!(
                "Unknown action '{}'. Valid actions: {}",
                request.action,
                command_catalog()
            )));
        }
    };

    debug!(action = %action, "Dispatching command");

    match action {
        CommandAction::Login => auth_handlers::login(&registry, &request).await,
        CommandAction::CheckToken => auth_handlers::check_token(&registry, &request).await,

        CommandAction::GetEmployees | CommandAction::GetAllEmployees => {
            let employees = staff::list(&store);
            HttpResponse::Ok().json(StaffListResponse { success: true, employees })
        }

        CommandAction::GetEmployeeById => {
            let employee = request.id.as_deref().and_then(|id| staff::find(&store, id));
            HttpResponse::Ok().json(StaffResponse { success: employee.is_some(), employee })
        }

        CommandAction::GetAllWorkareas => {
            let areas = areas::list(&store);
            HttpResponse::Ok().json(AreaListResponse { success: true, areas })
        }

        CommandAction::AddEmployee => {
            if registry.authorize(request.token.as_deref()).await.is_none() {
                return denied();
            }
            let Some(record) = request.new_employee.as_ref() else {
                return denied();
            };
            let success = staff::add(&store, record);
            if success {
                info!(employee_id = %record.employee_id, "Employee added");
            }
            HttpResponse::Ok().json(MutationResponse { success })
        }

        CommandAction::DeleteEmployee => {
            if registry.authorize(request.token.as_deref()).await.is_none() {
                return denied();
            }
            let Some(employee_id) = request.employee_id.as_deref() else {
                return denied();
            };
            let success = staff::delete(&store, employee_id);
            if success {
                info!(employee_id, "Employee deleted");
            }
            HttpResponse::Ok().json(MutationResponse { success })
        }

        CommandAction::AddWorkarea => {
            if registry.authorize(request.token.as_deref()).await.is_none() {
                return denied();
            }
            let Some(area) = request.area.as_ref() else {
                return denied();
            };
            let success = areas::add(&store, area);
            if success {
                info!(area_id = %area.id, "Work area added");
            }
            HttpResponse::Ok().json(MutationResponse { success })
        }

        CommandAction::DeleteWorkarea => {
            if registry.authorize(request.token.as_deref()).await.is_none() {
                return denied();
            }
            let Some(area_id) = request.area_id.as_deref() else {
                return denied();
            };
            let success = areas::delete(&store, area_id);
            if success {
                info!(area_id, "Work area deleted");
            }
            HttpResponse::Ok().json(MutationResponse { success })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemorySheetBackend;
    use actix_web::{App, test, web::Data};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    macro_rules! spawn_app {
        () => {{
            let store = SheetStore::new(Arc::new(MemorySheetBackend::default()));
            let registry = TokenRegistry::new(Duration::from_secs(60));
            test::init_service(
                App::new()
                    .app_data(Data::new(store))
                    .app_data(Data::new(registry))
                    .service(web::resource("/exec").route(web::post().to(exec_command))),
            )
            .await
        }};
    }

    macro_rules! post_json {
        ($app:expr, $body:expr) => {{
            let req = test::TestRequest::post()
                .uri("/exec")
                .set_json($body)
                .to_request();
            let body: Value = test::call_and_read_body_json(&$app, req).await;
            body
        }};
    }

    macro_rules! login {
        ($app:expr) => {{
            let body = post_json!(
                $app,
                json!({"action": "login", "username": "admin", "password": "admin#2024"})
            );
            assert_eq!(body["success"], true);
            body["token"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn unknown_action_fails_with_the_catalog_and_no_side_effects() {
        let app = spawn_app!();
        let body = post_json!(app, json!({"action": "formatDisk"}));

        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("formatDisk"));
        assert!(body["error"].as_str().unwrap().contains("addEmployee"));

        let listing = post_json!(app, json!({"action": "getAllEmployees"}));
        assert_eq!(listing["employees"], json!([]));
    }

    #[actix_web::test]
    async fn malformed_body_is_a_failure_envelope_not_a_400() {
        let app = spawn_app!();
        let req = test::TestRequest::post()
            .uri("/exec")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("Malformed"));
    }

    #[actix_web::test]
    async fn login_rejects_bad_credentials_and_issues_tokens_for_good_ones() {
        let app = spawn_app!();

        let bad = post_json!(
            app,
            json!({"action": "login", "username": "admin", "password": "nope"})
        );
        assert_eq!(bad["success"], false);
        assert!(bad.get("token").is_none());

        let good = post_json!(
            app,
            json!({"action": "login", "username": "manager", "password": "field#2024"})
        );
        assert_eq!(good["success"], true);
        assert!(!good["token"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn check_token_only_accepts_issued_tokens() {
        let app = spawn_app!();

        for body in [
            json!({"action": "checkToken"}),
            json!({"action": "checkToken", "token": ""}),
            json!({"action": "checkToken", "token": "not-issued"}),
        ] {
            let resp = post_json!(app, body);
            assert_eq!(resp["success"], false);
        }

        let token = login!(app);
        let resp = post_json!(app, json!({"action": "checkToken", "token": &token}));
        assert_eq!(resp["success"], true);
    }

    #[actix_web::test]
    async fn mutations_without_a_valid_token_are_denied_silently() {
        let app = spawn_app!();

        for body in [
            json!({"action": "addEmployee", "newEmployee": {"employeeId": "e1", "name": "X", "department": "D", "position": "P"}}),
            json!({"action": "deleteEmployee", "token": "bogus", "employeeId": "e1"}),
            json!({"action": "addWorkarea", "token": "", "area": {"id": "a1", "name": "N", "center": {"lat": 0.0, "lng": 0.0}, "radius": 1.0, "description": "", "color": "#000"}}),
            json!({"action": "deleteWorkarea", "areaId": "a1"}),
        ] {
            let resp = post_json!(app, body);
            assert_eq!(resp["success"], false);
            assert!(resp.get("error").is_none(), "denial must carry no error text");
        }

        let listing = post_json!(app, json!({"action": "getAllEmployees"}));
        assert_eq!(listing["employees"], json!([]));
    }

    #[actix_web::test]
    async fn employee_add_list_delete_flow() {
        let app = spawn_app!();
        let token = login!(app);

        let added = post_json!(
            app,
            json!({
                "action": "addEmployee",
                "token": &token,
                "newEmployee": {
                    "employeeId": "emp100",
                    "name": "Hanako Sato",
                    "phone": "090-1234-5678",
                    "email": null,
                    "department": "Field Operations",
                    "position": "Surveyor",
                    "hireDate": "2024-04-01"
                }
            })
        );
        assert_eq!(added["success"], true);

        let listing = post_json!(app, json!({"action": "getAllEmployees"}));
        assert_eq!(listing["success"], true);
        let employees = listing["employees"].as_array().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0]["employeeId"], "emp100");
        assert_eq!(employees[0]["name"], "Hanako Sato");
        // Round trip through the sheet preserves the calendar date.
        assert_eq!(employees[0]["hireDate"], "2024-04-01");

        let found = post_json!(app, json!({"action": "getEmployeeById", "id": "emp100"}));
        assert_eq!(found["success"], true);
        assert_eq!(found["employee"]["position"], "Surveyor");

        let missing = post_json!(app, json!({"action": "getEmployeeById", "id": "emp999"}));
        assert_eq!(missing["success"], false);
        assert!(missing.get("employee").is_none());

        let deleted = post_json!(
            app,
            json!({"action": "deleteEmployee", "token": &token, "employeeId": "emp100"})
        );
        assert_eq!(deleted["success"], true);

        let listing = post_json!(app, json!({"action": "getAllEmployees"}));
        assert_eq!(listing["employees"], json!([]));
    }

    #[actix_web::test]
    async fn delete_preserves_the_order_of_surviving_rows() {
        let app = spawn_app!();
        let token = login!(app);

        for id in ["e1", "e2", "e3"] {
            let body = post_json!(
                app,
                json!({
                    "action": "addEmployee",
                    "token": &token,
                    "newEmployee": {"employeeId": id, "name": id, "department": "D", "position": "P"}
                })
            );
            assert_eq!(body["success"], true);
        }

        let deleted = post_json!(
            app,
            json!({"action": "deleteEmployee", "token": &token, "employeeId": "e2"})
        );
        assert_eq!(deleted["success"], true);

        let listing = post_json!(app, json!({"action": "getEmployees"}));
        let ids: Vec<&str> = listing["employees"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["employeeId"].as_str().unwrap())
            .collect();
        assert_eq!(ids, ["e1", "e3"]);
    }

    #[actix_web::test]
    async fn deleting_a_nonexistent_employee_changes_nothing() {
        let app = spawn_app!();
        let token = login!(app);

        let body = post_json!(
            app,
            json!({
                "action": "addEmployee",
                "token": &token,
                "newEmployee": {"employeeId": "e1", "name": "X", "department": "D", "position": "P"}
            })
        );
        assert_eq!(body["success"], true);

        let deleted = post_json!(
            app,
            json!({"action": "deleteEmployee", "token": &token, "employeeId": "ghost"})
        );
        assert_eq!(deleted["success"], false);

        let listing = post_json!(app, json!({"action": "getAllEmployees"}));
        assert_eq!(listing["employees"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn add_employee_without_a_payload_is_refused() {
        let app = spawn_app!();
        let token = login!(app);

        let body = post_json!(app, json!({"action": "addEmployee", "token": &token}));
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn workarea_round_trip_returns_the_exact_record() {
        let app = spawn_app!();
        let token = login!(app);

        let area = json!({
            "id": "a1",
            "name": "North",
            "center": {"lat": 35.1, "lng": 139.1},
            "radius": 50.0,
            "description": "",
            "color": "#fff"
        });

        let added = post_json!(
            app,
            json!({"action": "addWorkarea", "token": &token, "area": area.clone()})
        );
        assert_eq!(added["success"], true);

        let listing = post_json!(app, json!({"action": "getAllWorkareas"}));
        assert_eq!(listing["success"], true);
        assert_eq!(listing["areas"], json!([area]));

        let deleted = post_json!(
            app,
            json!({"action": "deleteWorkarea", "token": &token, "areaId": "a1"})
        );
        assert_eq!(deleted["success"], true);

        let listing = post_json!(app, json!({"action": "getAllWorkareas"}));
        assert_eq!(listing["areas"], json!([]));
    }
}
