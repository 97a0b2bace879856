use crate::model::geofence::CircularGeoFence;
use crate::model::staff_record::StaffRecord;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Envelope timestamp: ISO-8601 UTC with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Uniform wire envelope for the query surface and for router-level
/// failures. Every response carries `success` and `timestamp`; exactly one
/// of `data`/`error` is present. Always shipped with HTTP 200 — the status
/// code carries no signal in this contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[schema(example = "2024-06-01T09:00:00.000Z")]
    pub timestamp: String,
}

impl ApiResponse {
    pub fn ok(data: impl Serialize) -> Self {
        Self {
            success: true,
            data: Some(serde_json::to_value(data).unwrap_or(Value::Null)),
            error: None,
            timestamp: now_iso(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            timestamp: now_iso(),
        }
    }
}

/// Flat query-string parameters of the query surface.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub action: Option<String>,
    pub employee_id: Option<String>,
}

/// Parsed POST body: the `action` discriminator plus whichever payload
/// fields the action consumes. Unused fields are simply absent.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandRequest {
    #[schema(example = "addEmployee")]
    pub action: String,
    pub token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub new_employee: Option<StaffRecord>,
    pub employee_id: Option<String>,
    pub id: Option<String>,
    pub area: Option<CircularGeoFence>,
    pub area_id: Option<String>,
}

// Secondary envelopes: specific commands answer `{success, ...payload}`
// instead of the data/error envelope.

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenCheckResponse {
    pub success: bool,
}

/// Bare outcome of a mutating command. Denials carry no error text.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffListResponse {
    pub success: bool,
    pub employees: Vec<StaffRecord>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StaffResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<StaffRecord>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AreaListResponse {
    pub success: bool,
    pub areas: Vec<CircularGeoFence>,
}
