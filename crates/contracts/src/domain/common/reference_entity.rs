use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::FromRecord;

/// Where the active/inactive filter of a list is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilterMode {
    /// Entity has no status column, the filter control is hidden
    #[default]
    Unsupported,
    /// Sent to the backend as `status_field:equals:<bool>`
    Server,
    /// Backend ignores the filter, the fetched page is filtered locally
    Client,
}

/// Referential entity.
///
/// Common contract of every referential aggregate: identity, status,
/// DTO conversion and the static metadata the generic list/form use.
pub trait ReferenceEntity:
    FromRecord + Clone + std::fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Create/update payload
    type Dto: Serialize + DeserializeOwned + Clone + Default + std::fmt::Debug + PartialEq + Send + Sync + 'static;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Numeric backend identifier
    fn id(&self) -> i64;

    /// Label used in confirmations and notifications
    fn display_name(&self) -> String;

    /// Active flag, `None` for entities without status
    fn is_active(&self) -> Option<bool> {
        None
    }

    /// Form payload pre-filled from this record
    fn to_dto(&self) -> Self::Dto;

    // ============================================================================
    // Entity metadata
    // ============================================================================

    /// Index in the system, e.g. "a001"
    fn entity_index() -> &'static str;

    /// Collection name, e.g. "supplier"
    fn collection_name() -> &'static str;

    /// `entityName` understood by the generic list endpoint, e.g. "Supplier"
    fn entity_name() -> &'static str;

    fn ui() -> EntityUiMetadata;

    /// Columns requested from the generic list endpoint
    fn fields() -> &'static [&'static str];

    /// Column the search box filters on with `contains`
    fn search_field() -> &'static str;

    /// Column holding the active flag, if any
    fn status_field() -> Option<&'static str> {
        None
    }

    fn status_filter_mode() -> StatusFilterMode {
        StatusFilterMode::Unsupported
    }

    /// Editable fields of [`Self::Dto`], in form order
    fn form_fields() -> &'static [FieldSpec];

    /// Form-level validation of a payload
    fn validate_dto(dto: &Self::Dto) -> Result<(), String>;

    // ============================================================================
    // Provided methods
    // ============================================================================

    /// Full name, e.g. "a001_supplier"
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }

    /// DTO as a JSON object of form values
    fn dto_to_form(dto: &Self::Dto) -> Map<String, Value> {
        match serde_json::to_value(dto) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// DTO from form values; conversion errors name the offending field.
    fn dto_from_form(values: &Map<String, Value>) -> Result<Self::Dto, String> {
        serde_json::from_value(Value::Object(values.clone()))
            .map_err(|e| format!("Invalid form value: {}", e))
    }
}
