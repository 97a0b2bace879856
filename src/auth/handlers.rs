use crate::auth::credentials;
use crate::auth::registry::TokenRegistry;
use crate::models::{CommandRequest, LoginResponse, TokenCheckResponse};
use actix_web::HttpResponse;
use tracing::info;

/// `login`: literal credential match, then a registry-issued opaque token.
pub async fn login(registry: &TokenRegistry, request: &CommandRequest) -> HttpResponse {
    let (Some(username), Some(password)) = (request.username.as_deref(), request.password.as_deref())
    else {
        return HttpResponse::Ok().json(LoginResponse { success: false, token: None });
    };

    match credentials::verify(username, password) {
        Some(role) => {
            let token = registry.issue(username, role).await;
            info!(username, role = ?role, "Login successful");
            HttpResponse::Ok().json(LoginResponse { success: true, token: Some(token) })
        }
        None => {
            info!(username, "Login rejected");
            HttpResponse::Ok().json(LoginResponse { success: false, token: None })
        }
    }
}

/// `checkToken`: valid only if the registry issued it and it has not
/// expired. Absent and empty tokens fail.
pub async fn check_token(registry: &TokenRegistry, request: &CommandRequest) -> HttpResponse {
    let success = registry.authorize(request.token.as_deref()).await.is_some();
    HttpResponse::Ok().json(TokenCheckResponse { success })
}
