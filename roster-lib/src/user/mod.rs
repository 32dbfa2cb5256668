use crate::auth::Authentication;
use actix_web::{web, Scope};
use roster_repo::user_repo::{User, UserId};
use serde::{Deserialize, Serialize};

pub mod handlers;

mod factory;
mod policy;
mod validate;

pub use validate::{UserInput, ValidationErrors};

/// Raw request payload for create and update. Field checks live in [validate].
#[derive(Deserialize, Clone)]
pub struct UserPayload {
    pub login: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Wire representation of a stored user. The stored hash goes out under the
/// `password` key; API consumers depend on that shape.
#[derive(Serialize)]
pub struct UserRead {
    pub id: UserId,
    pub login: String,
    pub phone: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl From<&User> for UserRead {
    fn from(user: &User) -> UserRead {
        UserRead {
            id: user.id,
            login: user.login.clone(),
            phone: user.phone.clone(),
            password_hash: user.password_hash.clone(),
        }
    }
}

pub fn user_service(signups_enabled: bool) -> Scope {
    let scope = web::scope("/users");
    let scope = if signups_enabled {
        scope.service(handlers::create_user)
    } else {
        scope
    };
    scope.service(
        web::scope("")
            .wrap(Authentication)
            .service(handlers::show_user)
            .service(handlers::update_user)
            .service(handlers::delete_user),
    )
}
