use std::collections::HashSet;
use std::sync::Arc;

use rstest::*;
use tracing::info;
use tracing::Level;
use uuid::Uuid;

use roster_lib::auth::jwt::JWTAuth;
use roster_lib::auth::password;
use roster_repo::user_repo::{NewUser, Role, User, UserRepo};

macro_rules! build_app {
    ($user_repo:ident, $jwt_auth:ident) => {{
        let app = App::new()
            .app_data($jwt_auth.clone())
            .app_data(Data::new($user_repo.clone()))
            .app_data(web::JsonConfig::default().error_handler(roster_lib::error::json_error_handler))
            .app_data(web::PathConfig::default().error_handler(roster_lib::error::path_error_handler))
            .wrap(roster_lib::tracing::create_middleware())
            .service(
                web::scope("/v1/api")
                    .service(roster_lib::auth::auth_service())
                    .service(roster_lib::user::user_service(true)),
            );
        tracing::info!("Built app");
        app
    }};
}

pub const TEST_PASSWORD: &str = "password";

pub struct TestUser {
    pub user: User,
    repo: Arc<dyn UserRepo>,
}

#[allow(dead_code)]
impl TestUser {
    pub async fn new(user_repo: &Arc<dyn UserRepo>) -> TestUser {
        Self::create(user_repo, HashSet::from([Role::User])).await
    }

    pub async fn new_root(user_repo: &Arc<dyn UserRepo>) -> TestUser {
        Self::create(user_repo, HashSet::from([Role::User, Role::Root])).await
    }

    async fn create(user_repo: &Arc<dyn UserRepo>, roles: HashSet<Role>) -> TestUser {
        let login = "test-user-".to_owned() + &Uuid::new_v4().to_string();
        let new_user = NewUser::new(
            login,
            "87654321".to_owned(),
            password::encode_password(TEST_PASSWORD).unwrap(),
            roles,
        );
        let user = user_repo.create_user(new_user).await.unwrap();
        info!(user_id = user.id, "Created user");
        TestUser {
            user,
            repo: user_repo.clone(),
        }
    }

    pub fn token(&self, jwt_auth: &JWTAuth) -> String {
        jwt_auth.create_token(&self.user)
    }

    pub async fn delete(&self) {
        self.repo.delete_user(self.user.id).await.unwrap()
    }
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn user_repo() -> Arc<dyn UserRepo> {
    roster_repo::mem_repo::create_repo()
}

#[fixture]
pub fn jwt_auth() -> JWTAuth {
    let secret: [u8; 32] = rand::random();
    JWTAuth::from_secret(secret.to_vec())
}
