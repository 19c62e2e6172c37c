use contracts::domain::a009_arrival::Arrival;

use crate::shared::reference_list::{EntityApi, EntityEndpoints};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/Arrivage");

pub fn arrival_api() -> EntityApi<Arrival> {
    EntityApi::new(&ENDPOINTS)
}
