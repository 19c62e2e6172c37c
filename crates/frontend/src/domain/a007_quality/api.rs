use contracts::domain::a007_quality::Quality;

use crate::shared::reference_list::{EntityApi, EntityEndpoints, IdPlacement, PayloadShape};

/// Create takes the name as a JSON string; update takes the full DTO.
pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/Quality")
    .create_payload(PayloadShape::RawString("name"))
    .delete_id(IdPlacement::Query("id"));

pub fn quality_api() -> EntityApi<Quality> {
    EntityApi::new(&ENDPOINTS)
}
