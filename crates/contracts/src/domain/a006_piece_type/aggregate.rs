use serde::{Deserialize, Serialize};

use crate::domain::common::validation::require;
use crate::domain::common::ReferenceEntity;
use crate::shared::metadata::{EntityUiMetadata, FieldSpec};
use crate::shared::normalize::{extract_i64, extract_string, FromRecord, Record};

const ID_KEYS: &[&str] = &["PieceType_Id", "Piece_Type_Id", "pieceType_Id", "id"];
const NAME_KEYS: &[&str] = &["PieceType_Name", "Piece_Type_Name", "pieceType_Name", "name"];

const FIELDS: &[&str] = &["PieceType_Id", "PieceType_Name"];

const FORM_FIELDS: &[FieldSpec] = &[FieldSpec::text("name", "Name").required()];

/// Piece type (log, plank, beam, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceType {
    pub id: i64,
    pub name: String,
}

impl FromRecord for PieceType {
    fn from_record(record: &Record) -> Self {
        Self {
            id: extract_i64(record, ID_KEYS, 0),
            name: extract_string(record, NAME_KEYS, ""),
        }
    }
}

impl ReferenceEntity for PieceType {
    type Dto = PieceTypeDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn to_dto(&self) -> PieceTypeDto {
        PieceTypeDto {
            name: self.name.clone(),
        }
    }

    fn entity_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "piece_type"
    }

    fn entity_name() -> &'static str {
        "PieceType"
    }

    fn ui() -> EntityUiMetadata {
        EntityUiMetadata {
            element_name: "Piece type",
            list_name: "Piece types",
            icon: "layers",
        }
    }

    fn fields() -> &'static [&'static str] {
        FIELDS
    }

    fn search_field() -> &'static str {
        "PieceType_Name"
    }

    fn form_fields() -> &'static [FieldSpec] {
        FORM_FIELDS
    }

    fn validate_dto(dto: &PieceTypeDto) -> Result<(), String> {
        require(&dto.name, "Name")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PieceTypeDto {
    pub name: String,
}
