//! Client for the remote pet catalog, the system of record for whether a pet
//! can still be adopted.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const AVAILABLE_STATUS: &str = "available";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetAvailability {
    Available,
    Unavailable { status: String },
}

#[derive(Debug, Error)]
pub enum PetCatalogError {
    #[error("pet catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("pet catalog returned {status} for pet {pet_id}")]
    UnexpectedStatus { pet_id: String, status: StatusCode },
    #[error("pet catalog returned an unreadable body for pet {pet_id}: {source}")]
    InvalidBody {
        pet_id: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("pet id {pet_id:?} does not address a single pet resource")]
    UnaddressablePetId { pet_id: String },
}

#[async_trait]
pub trait PetAvailabilityChecker: Send + Sync {
    async fn check(&self, pet_id: &str) -> Result<PetAvailability, PetCatalogError>;
}

/// Pet resource as returned by `GET /pets/{id}`. Only the status matters here.
#[derive(Debug, Deserialize)]
struct PetRecord {
    #[serde(default)]
    status: Option<String>,
}

impl PetRecord {
    /// A missing or blank status does not block adoption.
    fn availability(self) -> PetAvailability {
        match self.status {
            Some(status) if !status.is_empty() && status != AVAILABLE_STATUS => {
                PetAvailability::Unavailable { status }
            }
            _ => PetAvailability::Available,
        }
    }
}

#[derive(Clone)]
pub struct HttpPetCatalog {
    client: Client,
    base_url: Url,
}

impl HttpPetCatalog {
    /// Without a timeout, a hung catalog holds the request until the
    /// transport gives up.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        anyhow::ensure!(!base_url.is_empty(), "Pet catalog base URL must be provided");

        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid pet catalog base URL {base_url}"))?;
        anyhow::ensure!(
            matches!(base_url.scheme(), "http" | "https") && !base_url.cannot_be_a_base(),
            "Pet catalog base URL {base_url} must be an http(s) URL"
        );

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .context("Failed to build pet catalog HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// URL path normalization folds `.` and `..` (encoded or not) into the
    /// parent path, which would turn the lookup into `GET /pets`.
    fn pet_url(&self, pet_id: &str) -> Result<Url, PetCatalogError> {
        let unaddressable = || PetCatalogError::UnaddressablePetId {
            pet_id: pet_id.to_string(),
        };
        if matches!(pet_id, "." | "..") {
            return Err(unaddressable());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| unaddressable())?
            .pop_if_empty()
            .push("pets")
            .push(pet_id);
        Ok(url)
    }
}

#[async_trait]
impl PetAvailabilityChecker for HttpPetCatalog {
    async fn check(&self, pet_id: &str) -> Result<PetAvailability, PetCatalogError> {
        let url = self.pet_url(pet_id)?;
        debug!("Checking pet availability at {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PetCatalogError::UnexpectedStatus {
                pet_id: pet_id.to_string(),
                status,
            });
        }

        let record: PetRecord =
            response
                .json()
                .await
                .map_err(|source| PetCatalogError::InvalidBody {
                    pet_id: pet_id.to_string(),
                    source,
                })?;
        Ok(record.availability())
    }
}
