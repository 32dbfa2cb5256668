use crate::user_repo::UserRepo;
use std::sync::Arc;

mod user_repo;

pub fn create_repo() -> Arc<dyn UserRepo> {
    Arc::new(user_repo::MemUserRepo::new())
}
