use crate::auth::jwt::JWTAuth;
use crate::auth::password;
use crate::error::ApiError;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use roster_repo::user_repo::UserRepo;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub struct LoginCredentials {
    pub login: String,
    pub password: String,
}

#[post("")]
pub async fn login(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    credentials: web::Json<LoginCredentials>,
    req: HttpRequest,
) -> Result<impl Responder, ApiError> {
    let credentials = credentials.into_inner();

    let Some(user) = user_repo.find_by_login(&credentials.login).await? else {
        return Err(ApiError::InvalidCredentials);
    };

    let matched = password::verify_password(&credentials.password, &user.password_hash)?;
    if !matched {
        return Err(ApiError::InvalidCredentials);
    }

    let jwt_auth = req.app_data::<JWTAuth>().unwrap();
    info!(user_id = user.id, "issued token");
    Ok(HttpResponse::Ok().json(json!({ "token": jwt_auth.create_token(&user) })))
}
