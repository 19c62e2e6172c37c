use contracts::domain::a008_city::City;

use crate::shared::reference_list::{EntityApi, EntityEndpoints};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/City");

pub fn city_api() -> EntityApi<City> {
    EntityApi::new(&ENDPOINTS)
}
