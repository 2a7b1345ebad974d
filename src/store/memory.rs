//! In-memory store used by handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DbErr, TryIntoModel};

use super::{AdoptionRequestStore, NewAdoptionRequest, StoreError, new_active_model};
use crate::entities::adoption_request;

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<adoption_request::Model>>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    pub fn records(&self) -> Vec<adoption_request::Model> {
        self.records.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(reason) => Err(StoreError::Database(DbErr::Custom(reason.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AdoptionRequestStore for MemoryStore {
    async fn create(
        &self,
        request: NewAdoptionRequest,
    ) -> Result<adoption_request::Model, StoreError> {
        self.check_failure()?;
        let model = new_active_model(request, Utc::now().fixed_offset()).try_into_model()?;
        self.records.lock().unwrap().push(model.clone());
        Ok(model)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_failure()
    }
}
