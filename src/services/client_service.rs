use crate::domain::client::Client;
use crate::error::{AppError, Result};
use crate::storage::DbPool;
use crate::storage::client_repo::ClientRepository;

#[derive(Clone, Debug)]
pub struct ClientService {
    pool: DbPool,
    repo: ClientRepository,
}

impl ClientService {
    #[must_use]
    pub const fn new(pool: DbPool, repo: ClientRepository) -> Self {
        Self { pool, repo }
    }

    /// # Errors
    /// Returns `AppError::BadRequest` if a required field is blank.
    #[tracing::instrument(err, skip_all)]
    pub async fn create(&self, full_name: &str, email: &str, phone: &str) -> Result<Client> {
        for (field, value) in [("fullName", full_name), ("email", email), ("phone", phone)] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{field} is required")));
            }
        }

        let client = self.repo.create(&self.pool, full_name.trim(), email.trim(), phone.trim()).await?;
        tracing::info!(client_id = %client.id, "Client created");
        Ok(client)
    }

    /// # Errors
    /// Returns `AppError::Database` if the query fails.
    #[tracing::instrument(err, skip(self))]
    pub async fn list(&self) -> Result<Vec<Client>> {
        let mut conn = self.pool.acquire().await?;
        self.repo.list(&mut conn).await
    }
}
