use crate::user_repo::{NewUser, Role, User, UserId, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use std::collections::HashSet;

pub struct SQLxUserRepo {
    pool: Pool<Postgres>,
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: UserId,
    login: String,
    phone: String,
    password_hash: String,
    roles: Vec<String>,
}

impl TryFrom<UserRow> for User {
    type Error = anyhow::Error;

    fn try_from(row: UserRow) -> Result<User, anyhow::Error> {
        let roles = row
            .roles
            .iter()
            .map(|role| role.parse())
            .collect::<Result<HashSet<Role>, _>>()?;
        Ok(User {
            id: row.id,
            login: row.login,
            phone: row.phone,
            password_hash: row.password_hash,
            roles,
        })
    }
}

fn role_names(roles: &HashSet<Role>) -> Vec<String> {
    roles.iter().map(|role| role.as_str().to_owned()).collect()
}

impl SQLxUserRepo {
    pub fn new(pool: Pool<Postgres>) -> SQLxUserRepo {
        SQLxUserRepo { pool }
    }
}

#[async_trait]
impl UserRepo for SQLxUserRepo {
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, login, phone, password_hash, roles FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get user {}", user_id))?;

        match row {
            Some(row) => Ok(row.try_into()?),
            None => Err(UserRepoError::UserNotFound(user_id)),
        }
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserRepoError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, login, phone, password_hash, roles FROM users WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to find user {}", login))?;

        row.map(User::try_from)
            .transpose()
            .map_err(UserRepoError::Other)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let id: UserId = sqlx::query_scalar(
            "INSERT INTO users(login, phone, password_hash, roles) VALUES($1, $2, $3, $4) RETURNING id",
        )
        .bind(&new_user.login)
        .bind(&new_user.phone)
        .bind(&new_user.password_hash)
        .bind(role_names(&new_user.roles))
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Unable to create user {}", new_user.login))?;

        Ok(User {
            id,
            login: new_user.login,
            phone: new_user.phone,
            password_hash: new_user.password_hash,
            roles: new_user.roles,
        })
    }

    async fn update_user(&self, user: &User) -> Result<(), UserRepoError> {
        // updates never change roles
        let result =
            sqlx::query("UPDATE users SET login = $1, phone = $2, password_hash = $3 WHERE id = $4")
                .bind(&user.login)
                .bind(&user.phone)
                .bind(&user.password_hash)
                .bind(user.id)
                .execute(&self.pool)
                .await
                .with_context(|| format!("Unable to update user {}", user.id))?;
        if result.rows_affected() == 1 {
            Ok(())
        } else {
            Err(UserRepoError::UserNotFound(user.id))
        }
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepoError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Unable to delete user {}", user_id))?;
        if result.rows_affected() == 1 {
            Ok(())
        } else {
            Err(UserRepoError::UserNotFound(user_id))
        }
    }
}
