use contracts::domain::a006_piece_type::PieceType;

use crate::shared::reference_list::{EntityApi, EntityEndpoints, IdPlacement, PayloadShape};

/// Piece types are a bare name: create/update take a JSON string body.
pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/PieceType")
    .create_payload(PayloadShape::RawString("name"))
    .update_payload(PayloadShape::RawString("name"))
    .update_id(IdPlacement::Query("id"))
    .delete_id(IdPlacement::Query("id"));

pub fn piece_type_api() -> EntityApi<PieceType> {
    EntityApi::new(&ENDPOINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::reference_list::api::build_body;
    use contracts::domain::a006_piece_type::PieceTypeDto;

    #[test]
    fn test_raw_string_body_and_query_ids() {
        let dto = PieceTypeDto { name: "Log ".into() };
        assert_eq!(build_body(ENDPOINTS.create_payload, &dto).unwrap(), serde_json::json!("Log"));
        assert_eq!(ENDPOINTS.delete_url("http://h:3000", 3), "http://h:3000/api/PieceType/Delete?id=3");
        assert_eq!(ENDPOINTS.update_url("http://h:3000", 3), "http://h:3000/api/PieceType/Update?id=3");
    }
}
