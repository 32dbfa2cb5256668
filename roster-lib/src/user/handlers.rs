use crate::auth::Identity;
use crate::error::ApiError;
use crate::user::policy::{self, UserAction};
use crate::user::validate;
use crate::user::{factory, UserPayload, UserRead};
use actix_web::web::ReqData;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use roster_repo::user_repo::{UserId, UserRepo};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

#[post("")]
pub async fn create_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    payload: web::Json<UserPayload>,
) -> Result<impl Responder, ApiError> {
    let input = validate::validate(&payload)?;
    let new_user = factory::create_from_input(input)?;

    let user = user_repo.create_user(new_user).await?;
    info!(user_id = user.id, "created user");

    Ok(HttpResponse::Created().json(UserRead::from(&user)))
}

#[get("/{user_id}")]
pub async fn show_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    identity: ReqData<Identity>,
    user_id: web::Path<UserId>,
) -> Result<impl Responder, ApiError> {
    let target = user_id.into_inner();
    if !policy::is_granted(&identity.into_inner(), UserAction::View, target) {
        return Err(ApiError::NotFound);
    }

    let user = user_repo.get_user(target).await?;
    Ok(HttpResponse::Ok().json(UserRead::from(&user)))
}

#[put("/{user_id}")]
pub async fn update_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    identity: ReqData<Identity>,
    user_id: web::Path<UserId>,
    payload: web::Json<UserPayload>,
) -> Result<impl Responder, ApiError> {
    let target = user_id.into_inner();
    if !policy::is_granted(&identity.into_inner(), UserAction::Edit, target) {
        return Err(ApiError::NotFound);
    }

    let mut user = user_repo.get_user(target).await?;
    let input = validate::validate(&payload)?;
    factory::update_from_input(&mut user, input)?;

    user_repo.update_user(&user).await?;
    info!(user_id = user.id, "updated user");

    Ok(HttpResponse::Ok().json(json!({ "id": user.id })))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    user_repo: web::Data<Arc<dyn UserRepo>>,
    identity: ReqData<Identity>,
    user_id: web::Path<UserId>,
) -> Result<impl Responder, ApiError> {
    let target = user_id.into_inner();
    if !policy::is_granted(&identity.into_inner(), UserAction::Delete, target) {
        // root-only; masked like view/edit so ids cannot be probed
        return Err(ApiError::NotFound);
    }

    user_repo.delete_user(target).await?;
    info!(user_id = target, "deleted user");

    Ok(HttpResponse::NoContent().finish())
}
