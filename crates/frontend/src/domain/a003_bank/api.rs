use contracts::domain::a003_bank::Bank;

use crate::shared::reference_list::{EntityApi, EntityEndpoints, IdPlacement};

/// Bank update/delete take the id as `?id=`.
pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/Bank")
    .update_id(IdPlacement::Query("id"))
    .delete_id(IdPlacement::Query("id"));

pub fn bank_api() -> EntityApi<Bank> {
    EntityApi::new(&ENDPOINTS)
}
