use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

pub type UserId = i32;

/// Role tags attached to a user. Every stored user carries [Role::User]; root users
/// additionally carry [Role::Root].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ROOT")]
    Root,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Root => "ROLE_ROOT",
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Role, Self::Err> {
        match s {
            "ROLE_USER" => Ok(Role::User),
            "ROLE_ROOT" => Ok(Role::Root),
            _ => Err(anyhow::anyhow!("Unknown role: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub phone: String,
    pub password_hash: String,
    pub roles: HashSet<Role>,
}

/// A user that has not been stored yet. The store assigns the id on creation.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub login: String,
    pub phone: String,
    pub password_hash: String,
    pub roles: HashSet<Role>,
}

impl NewUser {
    pub fn new(
        login: String,
        phone: String,
        password_hash: String,
        roles: HashSet<Role>,
    ) -> NewUser {
        NewUser {
            login,
            phone,
            password_hash,
            roles,
        }
    }
}

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError>;
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepoError>;
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;
    async fn update_user(&self, user: &User) -> Result<(), UserRepoError>;
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError>;
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
