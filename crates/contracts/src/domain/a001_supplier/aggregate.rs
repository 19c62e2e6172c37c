use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::blank_as_none;
use crate::domain::common::validation::{optional_email, require};
use crate::domain::common::{ReferenceEntity, StatusFilterMode};
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{
    extract_bool, extract_i64, extract_opt_string, extract_string, FromRecord, Record,
};

// ============================================================================
// Backend field names
// ============================================================================

const ID_KEYS: &[&str] = &["Supplier_Id", "supplier_Id", "supplierId", "id"];
const CODE_KEYS: &[&str] = &["Supplier_Code", "supplier_Code", "code"];
const NAME_KEYS: &[&str] = &["Supplier_Name", "supplier_Name", "supplierName", "name"];
const COUNTRY_KEYS: &[&str] = &["Country_Name", "country_Name", "country"];
const EMAIL_KEYS: &[&str] = &["Email", "email", "Supplier_Email"];
const PHONE_KEYS: &[&str] = &["Phone", "phone", "Supplier_Phone"];
const ACTIVE_KEYS: &[&str] = &["Is_Active", "is_Active", "isActive", "active"];

const FIELDS: &[&str] = &[
    "Supplier_Id",
    "Supplier_Code",
    "Supplier_Name",
    "Country_Name",
    "Email",
    "Phone",
    "Is_Active",
];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("code", "Code").required(),
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("country", "Country"),
    FieldSpec::text("email", "E-mail").with_placeholder("contact@example.com"),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::checkbox("is_active", "Active"),
];

// ============================================================================
// Aggregate
// ============================================================================

/// Supplier of goods delivered through the port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
}

impl FromRecord for Supplier {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            code: extract_string(record, CODE_KEYS, ""),
            name: extract_string(record, NAME_KEYS, ""),
            country: extract_opt_string(record, COUNTRY_KEYS),
            email: extract_opt_string(record, EMAIL_KEYS),
            phone: extract_opt_string(record, PHONE_KEYS),
            is_active: extract_bool(record, ACTIVE_KEYS, true),
        }
    }
}

impl ReferenceEntity for Supplier {
    type Dto = SupplierDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn to_dto(&self) -> SupplierDto {
        SupplierDto {
            code: self.code.clone(),
            name: self.name.clone(),
            country: self.country.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            is_active: self.is_active,
        }
    }

    fn entity_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn entity_name() -> &'static str {
        "Supplier"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Supplier",
            list_name: "Suppliers",
            icon: "suppliers",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Supplier_Name"
    }

    fn status_field() -> Option<&'static str> {
        Some("Is_Active")
    }

    fn status_filter_mode() -> StatusFilterMode {
        StatusFilterMode::Server
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &SupplierDto) -> Result<(), String> {
        dto.validate()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload of a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for SupplierDto {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            country: None,
            email: None,
            phone: None,
            is_active: true,
        }
    }
}

impl SupplierDto {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.code, "Code")?;
        require(&self.name, "Name")?;
        optional_email(self.email.as_deref(), "E-mail")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_backend_casing() {
        let record = json!({
            "Supplier_Id": 12,
            "Supplier_Code": "SUP-12",
            "Supplier_Name": "Atlantic Timber",
            "Country_Name": "Gabon",
            "Email": null,
            "Is_Active": 0
        });
        let supplier = Supplier::from_record(record.as_object().unwrap());
        assert_eq!(supplier.id, 12);
        assert_eq!(supplier.name, "Atlantic Timber");
        assert_eq!(supplier.country.as_deref(), Some("Gabon"));
        assert_eq!(supplier.email, None);
        assert!(!supplier.is_active);
    }

    #[test]
    fn test_from_record_lowercase_variant() {
        let record = json!({ "supplier_Id": "7", "name": "Nordic Steel", "isActive": true });
        let supplier = Supplier::from_record(record.as_object().unwrap());
        assert_eq!(supplier.id, 7);
        assert_eq!(supplier.name, "Nordic Steel");
        assert_eq!(supplier.code, "");
        assert_eq!(supplier.is_active(), Some(true));
    }

    #[test]
    fn test_validate() {
        let mut dto = SupplierDto {
            code: "S1".into(),
            name: "Acme".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.email = Some("not-an-email".into());
        assert!(dto.validate().is_err());
        dto.email = None;
        dto.name = " ".into();
        assert_eq!(dto.validate().unwrap_err(), "Name is required");
    }

    #[test]
    fn test_dto_from_form_blank_optionals() {
        let values = json!({ "code": "S1", "name": "Acme", "email": "", "is_active": true });
        let dto = Supplier::dto_from_form(values.as_object().unwrap()).unwrap();
        assert_eq!(dto.email, None);
        assert!(dto.is_active);

        let form = Supplier::dto_to_form(&dto);
        assert_eq!(form["code"], "S1");
    }
}
