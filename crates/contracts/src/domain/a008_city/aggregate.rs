use serde::{Deserialize, Serialize};

use crate::domain::common::serde_helpers::blank_as_none;
use crate::domain::common::validation::require;
use crate::domain::common::ReferenceEntity;
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{extract_i64, extract_opt_string, extract_string, FromRecord, Record};

const ID_KEYS: &[&str] = &["City_Id", "city_Id", "cityId", "id"];
const NAME_KEYS: &[&str] = &["City_Name", "city_Name", "cityName", "name"];
const POSTAL_CODE_KEYS: &[&str] = &["Postal_Code", "postal_Code", "postalCode", "zip"];
const COUNTRY_KEYS: &[&str] = &["Country_Name", "country_Name", "country"];

const FIELDS: &[&str] = &["City_Id", "City_Name", "Postal_Code", "Country_Name"];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::text("postal_code", "Postal code"),
    FieldSpec::text("country", "Country"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl FromRecord for City {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            name: extract_string(record, NAME_KEYS, ""),
            postal_code: extract_opt_string(record, POSTAL_CODE_KEYS),
            country: extract_opt_string(record, COUNTRY_KEYS),
        }
    }
}

impl ReferenceEntity for City {
    type Dto = CityDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        match &self.postal_code {
            Some(code) => format!("{} {}", code, self.name),
            None => self.name.clone(),
        }
    }

    fn to_dto(&self) -> CityDto {
        CityDto {
            name: self.name.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
        }
    }

    fn entity_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "city"
    }

    fn entity_name() -> &'static str {
        "City"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "City",
            list_name: "Cities",
            icon: "building",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "City_Name"
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &CityDto) -> Result<(), String> {
        require(&dto.name, "Name")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CityDto {
    pub name: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_numeric_postal_code() {
        let record = json!({ "City_Id": 5, "City_Name": "Le Havre", "postalCode": 76600 });
        let city = City::from_record(record.as_object().unwrap());
        assert_eq!(city.postal_code.as_deref(), Some("76600"));
        assert_eq!(city.display_name(), "76600 Le Havre");
        assert_eq!(city.country, None);
    }
}
