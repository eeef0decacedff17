use sqlx::PgPool;
use tutorbase_core::UploadStorage;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::uploads::UploadConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub cors_config: CorsConfig,
    pub storage: UploadStorage,
}

pub async fn init_app_state() -> AppState {
    let upload_config = UploadConfig::from_env();

    AppState {
        db: init_db_pool().await,
        cors_config: CorsConfig::from_env(),
        storage: UploadStorage::new(upload_config.dir),
    }
}
