use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::blank_as_none;
use crate::domain::common::validation::{require, require_letters};
use crate::domain::common::ReferenceEntity;
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{extract_i64, extract_opt_string, extract_string, FromRecord, Record};

const ID_KEYS: &[&str] = &["Currency_Id", "currency_Id", "currencyId", "id"];
const CODE_KEYS: &[&str] = &["Currency_Code", "currency_Code", "code"];
const NAME_KEYS: &[&str] = &["Currency_Name", "currency_Name", "name", "label"];
const SYMBOL_KEYS: &[&str] = &["Symbol", "symbol", "Currency_Symbol"];

const FIELDS: &[&str] = &["Currency_Id", "Currency_Code", "Currency_Name", "Symbol"];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("code", "ISO code").required().with_placeholder("EUR"),
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("symbol", "Symbol"),
];

/// Currency (ISO 4217)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub symbol: Option<String>,
}

impl FromRecord for Currency {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            code: extract_string(record, CODE_KEYS, ""),
            name: extract_string(record, NAME_KEYS, ""),
            symbol: extract_opt_string(record, SYMBOL_KEYS),
        }
    }
}

impl ReferenceEntity for Currency {
    type Dto = CurrencyDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    fn to_dto(&self) -> CurrencyDto {
        CurrencyDto {
            code: self.code.clone(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
        }
    }

    fn entity_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "currency"
    }

    fn entity_name() -> &'static str {
        "Currency"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Currency",
            list_name: "Currencies",
            icon: "coins",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Currency_Name"
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &CurrencyDto) -> Result<(), String> {
        dto.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrencyDto {
    pub code: String,
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub symbol: Option<String>,
}

impl CurrencyDto {
    pub fn validate(&self) -> Result<(), String> {
        require_letters(&self.code, 3, "ISO code")?;
        require(&self.name, "Name")?;
        Ok(())
    }
}
