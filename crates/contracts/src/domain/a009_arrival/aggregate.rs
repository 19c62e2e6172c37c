use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::common::serde_helpers::blank_as_none;
use crate::domain::common::validation::require;
use crate::domain::common::ReferenceEntity;
use crate::shared::calendar::CalendarEvent;
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{
    extract_f64, extract_i64, extract_opt_string, extract_string, FromRecord, Record,
};

const ID_KEYS: &[&str] = &["Arrivage_Id", "arrivage_Id", "Arrival_Id", "arrivalId", "id"];
const REFERENCE_KEYS: &[&str] = &["Arrivage_Ref", "arrivage_Ref", "Reference", "reference"];
const SUPPLIER_KEYS: &[&str] = &["Supplier_Name", "supplier_Name", "supplier"];
const VESSEL_KEYS: &[&str] = &["Vessel_Name", "vessel_Name", "Navire", "vessel"];
const DATE_KEYS: &[&str] = &["Arrival_Date", "arrival_Date", "Date_Arrivage", "arrivalDate"];
const WEIGHT_KEYS: &[&str] = &["Net_Weight", "net_Weight", "Poids_Net", "netWeightKg"];
const STATUS_KEYS: &[&str] = &["Status", "status", "Arrivage_Status"];

const FIELDS: &[&str] = &[
    "Arrivage_Id",
    "Arrivage_Ref",
    "Supplier_Name",
    "Vessel_Name",
    "Arrival_Date",
    "Net_Weight",
    "Status",
];

const FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("reference", "Reference").required(),
    FieldSpec::text("supplier", "Supplier").required(),
    FieldSpec::text("vessel", "Vessel"),
    FieldSpec::date("arrival_date", "Arrival date"),
    FieldSpec::number("net_weight_kg", "Net weight (kg)"),
];

// ============================================================================
// Status
// ============================================================================

/// Stage of an arrival at the port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalStatus {
    #[default]
    Expected,
    Docked,
    Weighed,
    Closed,
}

impl ArrivalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expected => "expected",
            Self::Docked => "docked",
            Self::Weighed => "weighed",
            Self::Closed => "closed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Expected => "Expected",
            Self::Docked => "Docked",
            Self::Weighed => "Weighed",
            Self::Closed => "Closed",
        }
    }

    /// Lenient parse of the backend status (any casing, French labels included).
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "docked" | "a_quai" | "à quai" => Self::Docked,
            "weighed" | "pese" | "pesé" => Self::Weighed,
            "closed" | "cloture" | "clôturé" => Self::Closed,
            _ => Self::Expected,
        }
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Arrivage: a tracked shipment arriving at the port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrival {
    pub id: i64,
    pub reference: String,
    pub supplier: String,
    pub vessel: Option<String>,
    pub arrival_date: Option<NaiveDate>,
    pub net_weight_kg: f64,
    pub status: ArrivalStatus,
}

/// Accepts `yyyy-mm-dd` and ISO date-times (the backend sends both).
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()))
        .or_else(|| NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok())
}

impl FromRecord for Arrival {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            reference: extract_string(record, REFERENCE_KEYS, ""),
            supplier: extract_string(record, SUPPLIER_KEYS, ""),
            vessel: extract_opt_string(record, VESSEL_KEYS),
            arrival_date: extract_opt_string(record, DATE_KEYS).and_then(|d| parse_date(&d)),
            net_weight_kg: extract_f64(record, WEIGHT_KEYS, 0.0),
            status: ArrivalStatus::parse(&extract_string(record, STATUS_KEYS, "")),
        }
    }
}

impl Arrival {
    /// Planning entry for this arrival, placed at 08:00 on the arrival day.
    /// Arrivals without a date are not planned.
    pub fn to_calendar_event(&self) -> Option<CalendarEvent> {
        let day = self.arrival_date?;
        let start = NaiveDateTime::new(day, NaiveTime::from_hms_opt(8, 0, 0)?);

        let mut props = Map::new();
        props.insert("supplier".into(), Value::String(self.supplier.clone()));
        props.insert("status".into(), Value::String(self.status.as_str().into()));
        if let Some(vessel) = &self.vessel {
            props.insert("vessel".into(), Value::String(vessel.clone()));
        }

        Some(CalendarEvent {
            id: format!("arrival-{}", self.id),
            title: format!("{} · {}", self.reference, self.supplier),
            start,
            end: None,
            extended_props: props,
        })
    }
}

impl ReferenceEntity for Arrival {
    type Dto = ArrivalDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.reference.clone()
    }

    fn to_dto(&self) -> ArrivalDto {
        ArrivalDto {
            reference: self.reference.clone(),
            supplier: self.supplier.clone(),
            vessel: self.vessel.clone(),
            arrival_date: self.arrival_date,
            net_weight_kg: self.net_weight_kg,
        }
    }

    fn entity_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "arrival"
    }

    fn entity_name() -> &'static str {
        "Arrivage"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Arrival",
            list_name: "Arrivals",
            icon: "shipments",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "Arrivage_Ref"
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &ArrivalDto) -> Result<(), String> {
        dto.validate()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArrivalDto {
    pub reference: String,
    pub supplier: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub vessel: Option<String>,
    #[serde(default)]
    pub arrival_date: Option<NaiveDate>,
    #[serde(default)]
    pub net_weight_kg: f64,
}

impl ArrivalDto {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.reference, "Reference")?;
        require(&self.supplier, "Supplier")?;
        if self.net_weight_kg < 0.0 || !self.net_weight_kg.is_finite() {
            return Err("Net weight must be a positive number".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_french_backend() {
        let record = json!({
            "arrivage_Id": 31,
            "Arrivage_Ref": "ARR-2026-031",
            "supplier_Name": "Atlantic Timber",
            "Navire": "MV Ocean Star",
            "Date_Arrivage": "2026-03-14T00:00:00",
            "Poids_Net": "24500.5",
            "Status": "A_QUAI"
        });
        let arrival = Arrival::from_record(record.as_object().unwrap());
        assert_eq!(arrival.id, 31);
        assert_eq!(arrival.vessel.as_deref(), Some("MV Ocean Star"));
        assert_eq!(arrival.arrival_date, NaiveDate::from_ymd_opt(2026, 3, 14));
        assert_eq!(arrival.net_weight_kg, 24500.5);
        assert_eq!(arrival.status, ArrivalStatus::Docked);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2026-01-02"), NaiveDate::from_ymd_opt(2026, 1, 2));
        assert_eq!(parse_date("02/01/2026"), NaiveDate::from_ymd_opt(2026, 1, 2));
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_calendar_event() {
        let mut arrival = Arrival {
            id: 4,
            reference: "ARR-4".into(),
            supplier: "Nordic Steel".into(),
            vessel: None,
            arrival_date: None,
            net_weight_kg: 0.0,
            status: ArrivalStatus::Expected,
        };
        assert!(arrival.to_calendar_event().is_none());

        arrival.arrival_date = NaiveDate::from_ymd_opt(2026, 5, 1);
        let event = arrival.to_calendar_event().unwrap();
        assert_eq!(event.id, "arrival-4");
        assert_eq!(event.day(), NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
        assert_eq!(event.extended_props["status"], "expected");
    }

    #[test]
    fn test_dto_from_form_date() {
        let values = json!({ "reference": "A", "supplier": "S", "arrival_date": "2026-02-03", "net_weight_kg": 1200 });
        let dto = Arrival::dto_from_form(values.as_object().unwrap()).unwrap();
        assert_eq!(dto.arrival_date, NaiveDate::from_ymd_opt(2026, 2, 3));
        assert_eq!(dto.net_weight_kg, 1200.0);

        let values = json!({ "reference": "A", "supplier": "S", "arrival_date": null });
        let dto = Arrival::dto_from_form(values.as_object().unwrap()).unwrap();
        assert_eq!(dto.arrival_date, None);
    }
}
