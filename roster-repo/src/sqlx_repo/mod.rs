use crate::user_repo::UserRepo;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

mod user_repo;

pub async fn create_repo(database_url: String, max_pool_size: u32) -> Arc<dyn UserRepo> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(&database_url)
        .await
        .unwrap();

    sqlx::migrate!().run(&pool).await.unwrap();
    info!("database migrations applied");

    Arc::new(user_repo::SQLxUserRepo::new(pool))
}
