use crate::domain::model::{Dimension, ServerSettings, StatEntry, User, Workset};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn max_concurrent_requests(&self) -> usize;
}

/// The backend API surface the store depends on.
#[async_trait]
pub trait PythiaApi: Send + Sync {
    async fn fetch_worksets(&self) -> Result<Vec<Workset>>;

    async fn fetch_dimension_stats(
        &self,
        workset: Uuid,
        dimension: Dimension,
    ) -> Result<Vec<StatEntry>>;

    async fn login(&self, email: &str, password: &str) -> Result<()>;

    async fn logout(&self) -> Result<()>;

    async fn reset_password(&self, email: &str) -> Result<()>;

    async fn change_password(&self, new_password: &str) -> Result<()>;

    async fn current_user(&self) -> Result<User>;

    async fn server_settings(&self) -> Result<ServerSettings>;
}
