use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::ReferenceEntity;
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{extract_i64, extract_string, FromRecord, Record};

const ID_KEYS: &[&str] = &["Country_Id", "country_Id", "countryId", "id"];
const CODE_KEYS: &[&str] = &["Country_Code", "country_Code", "iso_code", "code"];
const NAME_KEYS: &[&str] = &["Country_Name", "country_Name", "countryName", "name"];

const FIELDS: &[&str] = &["Country_Id", "Country_Code", "Country_Name"];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("code", "ISO code").required().with_placeholder("FR / FRA"),
    FieldSpec::text("name", "Name").required(),
];

/// Country (ISO 3166)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl FromRecord for Country {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            code: extract_string(record, CODE_KEYS, ""),
            name: extract_string(record, NAME_KEYS, ""),
        }
    }
}

impl ReferenceEntity for Country {
    type Dto = CountryDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_dto(&self) -> CountryDto {
        CountryDto {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }

    fn entity_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "country"
    }

    fn entity_name() -> &'static str {
        "Country"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Country",
            list_name: "Countries",
            icon: "globe",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Country_Name"
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &CountryDto) -> Result<(), String> {
        dto.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CountryDto {
    pub code: String,
    pub name: String,
}

impl CountryDto {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.name, "Name")?;
        let code = self.code.trim();
        let len = code.chars().count();
        if !(len == 2 || len == 3) || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err("ISO code must contain 2 or 3 letters".into());
        }
        Ok(())
    }
}
