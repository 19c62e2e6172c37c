use contracts::domain::a004_currency::Currency;

use crate::shared::reference_list::{EntityApi, EntityEndpoints};

pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/Currency");

pub fn currency_api() -> EntityApi<Currency> {
    EntityApi::new(&ENDPOINTS)
}
