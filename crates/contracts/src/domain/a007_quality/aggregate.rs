use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::{ReferenceEntity, StatusFilterMode};
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{extract_bool, extract_i64, extract_string, FromRecord, Record};

const ID_KEYS: &[&str] = &["Quality_Id", "quality_Id", "qualityId", "id"];
const NAME_KEYS: &[&str] = &["Quality_Name", "quality_Name", "qualityName", "name"];
const ACTIVE_KEYS: &[&str] = &["Is_Active", "is_Active", "isActive", "active"];

const FIELDS: &[&str] = &["Quality_Id", "Quality_Name", "Is_Active"];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::checkbox("is_active", "Active"),
];

/// Quality grade of delivered goods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quality {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
}

impl FromRecord for Quality {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            name: extract_string(record, NAME_KEYS, ""),
            is_active: extract_bool(record, ACTIVE_KEYS, true),
        }
    }
}

impl ReferenceEntity for Quality {
    type Dto = QualityDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn to_dto(&self) -> QualityDto {
        QualityDto {
            name: self.name.clone(),
            is_active: self.is_active,
        }
    }

    fn entity_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "quality"
    }

    fn entity_name() -> &'static str {
        "Quality"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Quality",
            list_name: "Qualities",
            icon: "tag",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Quality_Name"
    }

    fn status_field() -> Option<&'static str> {
        Some("Is_Active")
    }

    fn status_filter_mode() -> StatusFilterMode {
        StatusFilterMode::Client
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &QualityDto) -> Result<(), String> {
        require(&dto.name, "Name")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityDto {
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for QualityDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_missing_status_defaults_active() {
        let record = json!({ "quality_Name": "Premium", "Quality_Id": 1 });
        let quality = Quality::from_record(record.as_object().unwrap());
        assert_eq!(quality.is_active(), Some(true));
    }
}
