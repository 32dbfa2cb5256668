use std::collections::HashSet;

use fake::faker::internet::en::Username;
use fake::Fake;
use uuid::Uuid;

use roster_repo::mem_repo;
use roster_repo::user_repo::{NewUser, Role, User, UserRepoError};

fn new_user(roles: HashSet<Role>) -> NewUser {
    let login: String = Username().fake();
    NewUser::new(
        login + "-" + &Uuid::new_v4().to_string(),
        "12345678".to_owned(),
        "not a real hash".to_owned(),
        roles,
    )
}

#[actix_rt::test]
async fn test_create_and_get_user() {
    let user_repo = mem_repo::create_repo();

    let user = user_repo
        .create_user(new_user(HashSet::from([Role::User])))
        .await
        .unwrap();

    let stored_user = user_repo.get_user(user.id).await.unwrap();
    assert_eq!(user, stored_user);
}

#[actix_rt::test]
async fn test_create_assigns_distinct_ids() {
    let user_repo = mem_repo::create_repo();

    let first = user_repo
        .create_user(new_user(HashSet::from([Role::User])))
        .await
        .unwrap();
    let second = user_repo
        .create_user(new_user(HashSet::from([Role::User])))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[actix_rt::test]
async fn test_get_missing_user() {
    let user_repo = mem_repo::create_repo();

    let get_result = user_repo.get_user(999999).await;
    assert!(matches!(
        get_result.unwrap_err(),
        UserRepoError::UserNotFound(999999)
    ));
}

#[actix_rt::test]
async fn test_find_by_login() {
    let user_repo = mem_repo::create_repo();

    let user = user_repo
        .create_user(new_user(HashSet::from([Role::User])))
        .await
        .unwrap();

    let found = user_repo.find_by_login(&user.login).await.unwrap();
    assert_eq!(found, Some(user));

    let not_found = user_repo.find_by_login("no-such-login").await.unwrap();
    assert_eq!(not_found, None);
}

#[actix_rt::test]
async fn test_update_user() {
    let user_repo = mem_repo::create_repo();

    let user = user_repo
        .create_user(new_user(HashSet::from([Role::User, Role::Root])))
        .await
        .unwrap();

    let updated = User {
        login: "updated".to_owned(),
        phone: "88887777".to_owned(),
        password_hash: "another hash".to_owned(),
        ..user.clone()
    };
    user_repo.update_user(&updated).await.unwrap();

    let stored_user = user_repo.get_user(user.id).await.unwrap();
    assert_eq!(updated, stored_user);
    assert_eq!(user.roles, stored_user.roles);
}

#[actix_rt::test]
async fn test_update_missing_user() {
    let user_repo = mem_repo::create_repo();

    let user = User {
        id: 42,
        login: "ghost".to_owned(),
        phone: "12345678".to_owned(),
        password_hash: "not a real hash".to_owned(),
        roles: HashSet::from([Role::User]),
    };
    let update_result = user_repo.update_user(&user).await;
    assert!(matches!(
        update_result.unwrap_err(),
        UserRepoError::UserNotFound(42)
    ));
}

#[actix_rt::test]
async fn test_delete_user() {
    let user_repo = mem_repo::create_repo();

    let user = user_repo
        .create_user(new_user(HashSet::from([Role::User])))
        .await
        .unwrap();

    user_repo.delete_user(user.id).await.unwrap();

    let get_result = user_repo.get_user(user.id).await;
    assert!(get_result.is_err());
}

#[actix_rt::test]
async fn test_delete_missing_user() {
    let user_repo = mem_repo::create_repo();

    let delete_result = user_repo.delete_user(7).await;
    assert!(matches!(
        delete_result.unwrap_err(),
        UserRepoError::UserNotFound(7)
    ));
}
