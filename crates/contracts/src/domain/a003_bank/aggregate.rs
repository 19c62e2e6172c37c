use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::blank_as_none;
use crate::domain::common::validation::require;
use crate::domain::common::{ReferenceEntity, StatusFilterMode};
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{
    extract_bool, extract_i64, extract_opt_string, extract_string, FromRecord, Record,
};

const ID_KEYS: &[&str] = &["Bank_Id", "bank_Id", "bankId", "id"];
const CODE_KEYS: &[&str] = &["Bank_Code", "bank_Code", "code"];
const NAME_KEYS: &[&str] = &["Bank_Name", "bank_Name", "bankName", "name"];
const SWIFT_KEYS: &[&str] = &["Swift_Code", "swift_Code", "Swift", "swift", "bic"];
const ACTIVE_KEYS: &[&str] = &["Is_Active", "is_Active", "isActive", "active"];

const FIELDS: &[&str] = &["Bank_Id", "Bank_Code", "Bank_Name", "Swift_Code", "Is_Active"];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("code", "Code").required(),
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("swift", "SWIFT / BIC").with_placeholder("8 or 11 characters"),
    FieldSpec::checkbox("is_active", "Active"),
];

/// Bank used for supplier payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub swift: Option<String>,
    pub is_active: bool,
}

impl FromRecord for Bank {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            code: extract_string(record, CODE_KEYS, ""),
            name: extract_string(record, NAME_KEYS, ""),
            swift: extract_opt_string(record, SWIFT_KEYS),
            is_active: extract_bool(record, ACTIVE_KEYS, true),
        }
    }
}

impl ReferenceEntity for Bank {
    type Dto = BankDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn to_dto(&self) -> BankDto {
        BankDto {
            code: self.code.clone(),
            name: self.name.clone(),
            swift: self.swift.clone(),
            is_active: self.is_active,
        }
    }

    fn entity_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "bank"
    }

    fn entity_name() -> &'static str {
        "Bank"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Bank",
            list_name: "Banks",
            icon: "bank",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Bank_Name"
    }

    fn status_field() -> Option<&'static str> {
        Some("Is_Active")
    }

    // the Bank endpoint ignores status filters
    fn status_filter_mode() -> StatusFilterMode {
        StatusFilterMode::Client
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &BankDto) -> Result<(), String> {
        dto.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDto {
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub swift: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for BankDto {
    fn default() -> Self {
        Self {
            code: String::new(),
            name: String::new(),
            swift: None,
            is_active: true,
        }
    }
}

impl BankDto {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.code, "Code")?;
        require(&self.name, "Name")?;
        if let Some(swift) = self.swift.as_deref().map(str::trim) {
            let len = swift.chars().count();
            if !(len == 8 || len == 11) || !swift.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err("SWIFT / BIC must contain 8 or 11 alphanumeric characters".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record() {
        let record = json!({ "bank_Id": 4, "Bank_Name": "BMCE", "swift": "BMCEMAMC", "Is_Active": "true" });
        let bank = Bank::from_record(record.as_object().unwrap());
        assert_eq!(bank.id, 4);
        assert_eq!(bank.swift.as_deref(), Some("BMCEMAMC"));
        assert!(bank.is_active);
    }

    #[test]
    fn test_validate_swift() {
        let mut dto = BankDto {
            code: "B1".into(),
            name: "Bank".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.swift = Some("BNPAFRPPXXX".into());
        assert!(dto.validate().is_ok());
        dto.swift = Some("BNP".into());
        assert!(dto.validate().is_err());
    }
}
