use contracts::domain::a002_country::Country;

use crate::shared::reference_list::{EntityApi, EntityEndpoints};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/Country");

pub fn country_api() -> EntityApi<Country> {
    EntityApi::new(&ENDPOINTS)
}
