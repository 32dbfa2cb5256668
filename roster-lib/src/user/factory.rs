use crate::auth::password;
use crate::user::UserInput;
use roster_repo::user_repo::{NewUser, Role, User};
use std::collections::HashSet;

/// Maps validated input to a new user. New users always start with [Role::User]
/// only; roots are provisioned directly in the store.
pub fn create_from_input(input: UserInput) -> Result<NewUser, argon2::Error> {
    let password_hash = password::encode_password(&input.password)?;
    Ok(NewUser::new(
        input.login,
        input.phone,
        password_hash,
        HashSet::from([Role::User]),
    ))
}

/// Applies validated input to an existing user. The password hash is only
/// recomputed when a password was supplied; roles are never touched.
pub fn update_from_input(user: &mut User, input: UserInput) -> Result<(), argon2::Error> {
    user.login = input.login;
    user.phone = input.phone;

    if !input.password.is_empty() {
        user.password_hash = password::encode_password(&input.password)?;
    }
    Ok(())
}
