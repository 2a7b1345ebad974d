use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::adoption_request::{self, AdoptionStatus};

/// Body of `POST /adoption-requests`. Required fields are checked by the
/// handler so that a missing field and an empty one fail the same way.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequestPayload {
    pub user_id: Option<String>,
    pub pet_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequestView {
    pub id: Uuid,
    pub user_id: String,
    pub pet_id: String,
    pub message: Option<String>,
    pub status: AdoptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<adoption_request::Model> for AdoptionRequestView {
    fn from(model: adoption_request::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            pet_id: model.pet_id,
            message: model.message,
            status: model.status,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBody {
    pub message: String,
}
