use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::{ReferenceEntity, StatusFilterMode};
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{extract_bool, extract_i64, extract_string, FromRecord, Record};

const ID_KEYS: &[&str] = &[
    "ContractCondition_Id",
    "Contract_Condition_Id",
    "contractCondition_Id",
    "id",
];
const CODE_KEYS: &[&str] = &["Condition_Code", "condition_Code", "code"];
const LABEL_KEYS: &[&str] = &["Condition_Label", "condition_Label", "Libelle", "label"];
const PAYMENT_DAYS_KEYS: &[&str] = &["Payment_Days", "payment_Days", "paymentDays"];
const ACTIVE_KEYS: &[&str] = &["Is_Active", "is_Active", "isActive", "active"];

const FIELDS: &[&str] = &[
    "ContractCondition_Id",
    "Condition_Code",
    "Condition_Label",
    "Payment_Days",
    "Is_Active",
];

/// Longest payment term accepted by the form, in days
pub const MAX_PAYMENT_DAYS: u32 = 365;

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("code", "Code").required(),
    FieldSpec::text("label", "Label").required(),
    FieldSpec::number("payment_days", "Payment term (days)"),
    FieldSpec::checkbox("is_active", "Active"),
];

/// Contract condition (payment / delivery terms) attached to supplier contracts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCondition {
    pub id: i64,
    pub code: String,
    pub label: String,
    pub payment_days: u32,
    pub is_active: bool,
}

impl FromRecord for ContractCondition {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            code: extract_string(record, CODE_KEYS, ""),
            label: extract_string(record, LABEL_KEYS, ""),
            payment_days: extract_i64(record, PAYMENT_DAYS_KEYS, 0).clamp(0, u32::MAX as i64) as u32,
            is_active: extract_bool(record, ACTIVE_KEYS, true),
        }
    }
}

impl ReferenceEntity for ContractCondition {
    type Dto = ContractConditionDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.label.clone()
    }

    fn is_active(&self) -> Option<bool> {
        Some(self.is_active)
    }

    fn to_dto(&self) -> ContractConditionDto {
        ContractConditionDto {
            code: self.code.clone(),
            label: self.label.clone(),
            payment_days: self.payment_days,
            is_active: self.is_active,
        }
    }

    fn entity_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "contract_condition"
    }

    fn entity_name() -> &'static str {
        "ContractCondition"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Contract condition",
            list_name: "Contract conditions",
            icon: "file-text",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Condition_Label"
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

    fn validate_dto(dto: &ContractConditionDto) -> Result<(), String> {
        dto.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConditionDto {
    pub code: String,
    pub label: String,
    #[serde(default)]
    pub payment_days: u32,
    #[serde(default)]
    pub is_active: bool,
}

impl Default for ContractConditionDto {
    fn default() -> Self {
        Self {
            code: String::new(),
            label: String::new(),
            payment_days: 30,
            is_active: true,
        }
    }
}

impl ContractConditionDto {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.code, "Code")?;
        require(&self.label, "Label")?;
        if self.payment_days > MAX_PAYMENT_DAYS {
            return Err(format!("Payment term cannot exceed {} days", MAX_PAYMENT_DAYS));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_negative_days_clamped() {
        let record = json!({ "Contract_Condition_Id": 3, "Libelle": "60 days EOM", "Payment_Days": -5 });
        let condition = ContractCondition::from_record(record.as_object().unwrap());
        assert_eq!(condition.id, 3);
        assert_eq!(condition.label, "60 days EOM");
        assert_eq!(condition.payment_days, 0);
    }

    #[test]
    fn test_dto_from_form_number() {
        let values = json!({ "code": "C60", "label": "60 days", "payment_days": 60, "is_active": false });
        let dto = ContractCondition::dto_from_form(values.as_object().unwrap()).unwrap();
        assert_eq!(dto.payment_days, 60);
        assert!(dto.validate().is_ok());

        let values = json!({ "code": "C60", "label": "60 days", "payment_days": "sixty" });
        assert!(ContractCondition::dto_from_form(values.as_object().unwrap()).is_err());
    }

    #[test]
    fn test_validate_max_days() {
        let dto = ContractConditionDto {
            code: "X".into(),
            label: "Too long".into(),
            payment_days: 400,
            is_active: true,
        };
        assert!(dto.validate().is_err());
    }
}
