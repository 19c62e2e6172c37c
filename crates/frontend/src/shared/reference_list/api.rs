//! Capability set a list screen is parametrized with, plus the generic
//! REST implementation shared by every referential.
//!
//! The backend is not uniform: some create endpoints take the DTO as is,
//! some want it wrapped under a key, some take a bare JSON string; ids go
//! in the path or in the query string. [`EntityEndpoints`] captures those
//! per entity so the controller never has to know.

use std::future::Future;
use std::marker::PhantomData;

use contracts::domain::common::{ReferenceEntity, StatusFilterMode};
use contracts::shared::normalize::read_page_envelope;
use contracts::shared::pagination::{PageRequest, PageResponse};
use contracts::shared::query::EntityFieldsQuery;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_client::{self, ApiError, WriteMethod};
use crate::shared::api_utils::{api_base, join_url};

/// Generic "entity fields with filters" list endpoint
pub const LIST_PATH: &str = "/api/Entity/GetEntityFieldsWithFilters";

/// Payload type of the entity behind an api
pub type DtoOf<A> = <<A as ReferenceApi>::Item as ReferenceEntity>::Dto;

/// `{fetch_page, create, update, remove}` for one entity
#[allow(async_fn_in_trait)]
pub trait ReferenceApi: Clone + Send + Sync + 'static {
    type Item: ReferenceEntity;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Self::Item>, ApiError>;

    async fn create(&self, draft: &DtoOf<Self>) -> Result<(), ApiError>;

    async fn update(&self, id: i64, draft: &DtoOf<Self>) -> Result<(), ApiError>;

    async fn remove(&self, id: i64) -> Result<(), ApiError>;
}

// ============================================================================
// Per-entity endpoint description
// ============================================================================

/// Body shape of a create/update request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// DTO serialized as a JSON object
    Json,
    /// `{ "<key>": dto }`
    Wrapped(&'static str),
    /// Bare JSON string taken from one DTO field, e.g. `"Premium"`
    RawString(&'static str),
}

/// Where the record id goes in update/delete URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPlacement {
    /// `.../Delete/42`
    Path,
    /// `.../Delete?<param>=42`
    Query(&'static str),
}

/// How an update reaches the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    InPlace,
    /// Delete the old record then create a new one. The record gets a new
    /// id, so anything referencing the old id is left dangling.
    RecreateOnUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityEndpoints {
    /// e.g. "/api/Supplier"
    pub base_path: &'static str,
    pub create_payload: PayloadShape,
    pub update_payload: PayloadShape,
    pub update_id: IdPlacement,
    pub delete_id: IdPlacement,
    pub update_strategy: UpdateStrategy,
}

impl EntityEndpoints {
    /// JSON bodies, ids in the path, in-place updates.
    pub const fn standard(base_path: &'static str) -> Self {
        Self {
            base_path,
            create_payload: PayloadShape::Json,
            update_payload: PayloadShape::Json,
            update_id: IdPlacement::Path,
            delete_id: IdPlacement::Path,
            update_strategy: UpdateStrategy::InPlace,
        }
    }

    pub const fn create_payload(mut self, shape: PayloadShape) -> Self {
        self.create_payload = shape;
        self
    }

    pub const fn update_payload(mut self, shape: PayloadShape) -> Self {
        self.update_payload = shape;
        self
    }

    pub const fn update_id(mut self, placement: IdPlacement) -> Self {
        self.update_id = placement;
        self
    }

    pub const fn delete_id(mut self, placement: IdPlacement) -> Self {
        self.delete_id = placement;
        self
    }

    pub const fn update_strategy(mut self, strategy: UpdateStrategy) -> Self {
        self.update_strategy = strategy;
        self
    }

    pub fn create_url(&self, base: &str) -> String {
        join_url(base, &format!("{}/Create", self.base_path))
    }

    pub fn update_url(&self, base: &str, id: i64) -> String {
        Self::with_id(join_url(base, &format!("{}/Update", self.base_path)), self.update_id, id)
    }

    pub fn delete_url(&self, base: &str, id: i64) -> String {
        Self::with_id(join_url(base, &format!("{}/Delete", self.base_path)), self.delete_id, id)
    }

    fn with_id(url: String, placement: IdPlacement, id: i64) -> String {
        match placement {
            IdPlacement::Path => format!("{}/{}", url, id),
            IdPlacement::Query(param) => format!("{}?{}={}", url, param, id),
        }
    }
}

/// Request body for `dto` in the given shape.
pub fn build_body<T: Serialize>(shape: PayloadShape, dto: &T) -> Result<Value, ApiError> {
    let value = serde_json::to_value(dto).map_err(|e| ApiError::Encode(e.to_string()))?;
    match shape {
        PayloadShape::Json => Ok(value),
        PayloadShape::Wrapped(key) => {
            let mut wrapper = serde_json::Map::new();
            wrapper.insert(key.to_string(), value);
            Ok(Value::Object(wrapper))
        }
        PayloadShape::RawString(field) => match value.get(field) {
            Some(Value::String(s)) => Ok(Value::String(s.trim().to_string())),
            _ => Err(ApiError::Encode(format!("field `{}` is not a string", field))),
        },
    }
}

/// Runs `remove` then `create`. A failed create after a successful
/// remove is reported as [`ApiError::PartialUpdate`]: the record is gone
/// on the server.
pub async fn recreate(
    id: i64,
    remove: impl Future<Output = Result<(), ApiError>>,
    create: impl Future<Output = Result<(), ApiError>>,
) -> Result<(), ApiError> {
    remove.await?;
    create.await.map_err(|cause| ApiError::PartialUpdate {
        deleted_id: id,
        cause: Box::new(cause),
    })
}

/// Generic list query for a page request of entity `E`.
pub fn list_query<E: ReferenceEntity>(request: &PageRequest) -> EntityFieldsQuery {
    let status_field = match E::status_filter_mode() {
        StatusFilterMode::Server => E::status_field(),
        StatusFilterMode::Client | StatusFilterMode::Unsupported => None,
    };
    EntityFieldsQuery::for_page(
        E::entity_name(),
        E::fields(),
        E::search_field(),
        status_field,
        request,
    )
}

/// Full list URL for a page request of entity `E`.
pub fn list_url<E: ReferenceEntity>(base: &str, request: &PageRequest) -> Result<String, ApiError> {
    let query = serde_qs::to_string(&list_query::<E>(request))
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(format!("{}?{}", join_url(base, LIST_PATH), query))
}

// ============================================================================
// REST implementation
// ============================================================================

/// [`ReferenceApi`] backed by the REST endpoints of entity `E`
pub struct EntityApi<E> {
    endpoints: &'static EntityEndpoints,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for EntityApi<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EntityApi<E> {}

impl<E: ReferenceEntity> EntityApi<E> {
    pub const fn new(endpoints: &'static EntityEndpoints) -> Self {
        Self {
            endpoints,
            _entity: PhantomData,
        }
    }

    pub fn endpoints(&self) -> &'static EntityEndpoints {
        self.endpoints
    }
}

impl<E: ReferenceEntity> ReferenceApi for EntityApi<E> {
    type Item = E;

    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<E>, ApiError> {
        let url = list_url::<E>(&api_base(), request)?;
        let envelope: Value = api_client::get_json(&url).await?;
        Ok(read_page_envelope::<E>(&envelope))
    }

    async fn create(&self, draft: &E::Dto) -> Result<(), ApiError> {
        let body = build_body(self.endpoints.create_payload, draft)?;
        api_client::send_json(WriteMethod::Post, &self.endpoints.create_url(&api_base()), &body).await
    }

    async fn update(&self, id: i64, draft: &E::Dto) -> Result<(), ApiError> {
        match self.endpoints.update_strategy {
            UpdateStrategy::InPlace => {
                let body = build_body(self.endpoints.update_payload, draft)?;
                let url = self.endpoints.update_url(&api_base(), id);
                api_client::send_json(WriteMethod::Put, &url, &body).await
            }
            UpdateStrategy::RecreateOnUpdate => {
                log::warn!(
                    "{}: update of #{} is a delete + create, the record will get a new id",
                    E::full_name(),
                    id
                );
                recreate(id, self.remove(id), self.create(draft)).await
            }
        }
    }

    async fn remove(&self, id: i64) -> Result<(), ApiError> {
        api_client::delete(&self.endpoints.delete_url(&api_base(), id)).await
    }
}
