use crate::error::ApiError;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, HttpMessage, Scope};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use jwt::JWTAuth;
use roster_repo::user_repo::{Role, UserId};
use std::collections::HashSet;
use tracing_actix_web::RootSpan;

pub mod handlers;
pub mod jwt;
pub mod password;

/// The authenticated requester, decoded from the bearer token's claims.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub roles: HashSet<Role>,
}

impl Identity {
    pub fn is_root(&self) -> bool {
        self.roles.contains(&Role::Root)
    }
}

pub fn auth_service() -> Scope {
    web::scope("/login").service(handlers::login)
}

/// Validates the bearer token using [JWTAuth]. If valid, injects the requester
/// [Identity] into the request and records the user id on the [RootSpan]; otherwise
/// the request is rejected with 401 before any handler runs.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = AuthenticationMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware { service }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let identity = match authenticate(&req) {
            Ok(identity) => identity,
            Err(e) => {
                let response = req.error_response(e).map_into_right_body();
                return Box::pin(ready(Ok(response)));
            }
        };

        if let Some(root_span) = req.extensions().get::<RootSpan>() {
            root_span.record("user_id", identity.user_id);
        }
        req.extensions_mut().insert(identity);

        let fut = self.service.call(req);
        Box::pin(async move {
            let res = fut.await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Identity, ApiError> {
    let jwt_auth = req.app_data::<JWTAuth>().unwrap();
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(ApiError::AuthenticationRequired)?;
    jwt_auth
        .validate_token(token)
        .map_err(|_| ApiError::AuthenticationRequired)
}
