//! `POST /adoption-requests`.
//!
//! The pet catalog is consulted before anything is written. There is no
//! lock between the check and the insert, so two concurrent requests for the
//! same pet can both succeed.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use thiserror::Error;
use tracing::{error, info};

use crate::entities::adoption_request;
use crate::models::adoption_request::{AdoptionRequestPayload, AdoptionRequestView};
use crate::pet_catalog::{PetAvailability, PetCatalogError};
use crate::state::AppState;
use crate::store::{NewAdoptionRequest, StoreError};

use super::HttpError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "userId and petId are required";
pub const PET_UNAVAILABLE_MESSAGE: &str = "Pet is not available for adoption";
pub const NUL_CHARACTER_MESSAGE: &str = "userId, petId and message must not contain NUL characters";

pub fn router() -> Router<AppState> {
    Router::new().route("/adoption-requests", post(create_adoption_request))
}

#[derive(Debug, Error)]
pub enum AdoptionError {
    #[error("userId and petId are required")]
    MissingFields,
    #[error("userId, petId and message must not contain NUL characters")]
    NulCharacter,
    #[error("pet {pet_id} has status {status}")]
    PetUnavailable { pet_id: String, status: String },
    #[error(transparent)]
    PetCatalog(#[from] PetCatalogError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<AdoptionError> for HttpError {
    fn from(err: AdoptionError) -> Self {
        match &err {
            AdoptionError::MissingFields => {
                HttpError::new(StatusCode::BAD_REQUEST, REQUIRED_FIELDS_MESSAGE.to_string())
            }
            AdoptionError::NulCharacter => {
                HttpError::new(StatusCode::BAD_REQUEST, NUL_CHARACTER_MESSAGE.to_string())
            }
            AdoptionError::PetUnavailable { .. } => {
                info!("Rejected adoption request: {err}");
                HttpError::new(StatusCode::BAD_REQUEST, PET_UNAVAILABLE_MESSAGE.to_string())
            }
            AdoptionError::PetCatalog(_) | AdoptionError::Store(_) => {
                error!("Error creating adoption request: {err}");
                HttpError::internal()
            }
        }
    }
}

async fn create_adoption_request(
    State(state): State<AppState>,
    payload: Result<Json<AdoptionRequestPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<AdoptionRequestView>), HttpError> {
    // A body sent without a JSON content type carries no fields.
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(JsonRejection::MissingJsonContentType(_)) => AdoptionRequestPayload::default(),
        Err(rejection) => {
            return Err(HttpError::new(
                StatusCode::BAD_REQUEST,
                rejection.body_text(),
            ));
        }
    };

    let created = submit(&state, payload).await?;
    info!(
        "Adoption request {} created for pet {} by user {}",
        created.id, created.pet_id, created.user_id
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn submit(
    state: &AppState,
    payload: AdoptionRequestPayload,
) -> Result<adoption_request::Model, AdoptionError> {
    let request = validate(payload)?;

    let availability = state.pet_catalog.check(&request.pet_id).await?;
    if let PetAvailability::Unavailable { status } = availability {
        return Err(AdoptionError::PetUnavailable {
            pet_id: request.pet_id,
            status,
        });
    }

    Ok(state.store.create(request).await?)
}

/// Postgres text columns cannot hold NUL, so such input is refused here
/// rather than failing at insert time.
fn validate(payload: AdoptionRequestPayload) -> Result<NewAdoptionRequest, AdoptionError> {
    let required = |value: Option<String>| value.filter(|v| !v.is_empty());
    let (Some(user_id), Some(pet_id)) = (required(payload.user_id), required(payload.pet_id))
    else {
        return Err(AdoptionError::MissingFields);
    };

    let has_nul = [Some(&user_id), Some(&pet_id), payload.message.as_ref()]
        .into_iter()
        .flatten()
        .any(|value| value.contains('\0'));
    if has_nul {
        return Err(AdoptionError::NulCharacter);
    }

    Ok(NewAdoptionRequest {
        user_id,
        pet_id,
        message: payload.message,
    })
}
