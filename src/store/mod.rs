//! Persistence for adoption requests.
//!
//! Handlers depend on [`AdoptionRequestStore`] rather than on a database
//! handle so the request flow can run against an in-memory store in tests.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use thiserror::Error;
use uuid::Uuid;

use crate::entities::adoption_request::{self, AdoptionStatus};

#[cfg(test)]
pub mod memory;

/// Validated input for a new adoption request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdoptionRequest {
    pub user_id: String,
    pub pet_id: String,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

#[async_trait]
pub trait AdoptionRequestStore: Send + Sync {
    /// Insert a new request with a generated id and `pending` status and
    /// return the stored row.
    async fn create(
        &self,
        request: NewAdoptionRequest,
    ) -> Result<adoption_request::Model, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct SeaOrmStore {
    database: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

#[async_trait]
impl AdoptionRequestStore for SeaOrmStore {
    async fn create(
        &self,
        request: NewAdoptionRequest,
    ) -> Result<adoption_request::Model, StoreError> {
        let record = new_active_model(request, Utc::now().fixed_offset());
        let model = record.insert(&self.database).await?;
        Ok(model)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.ping().await?;
        Ok(())
    }
}

pub(crate) fn new_active_model(
    request: NewAdoptionRequest,
    now: DateTime<FixedOffset>,
) -> adoption_request::ActiveModel {
    assert!(!request.user_id.is_empty(), "User id must be validated");
    assert!(!request.pet_id.is_empty(), "Pet id must be validated");

    adoption_request::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(request.user_id),
        pet_id: ActiveValue::Set(request.pet_id),
        message: ActiveValue::Set(request.message),
        status: ActiveValue::Set(AdoptionStatus::default()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}
