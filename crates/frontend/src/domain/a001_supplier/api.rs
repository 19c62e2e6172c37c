use contracts::domain::a001_supplier::Supplier;

use crate::shared::reference_list::{EntityApi, EntityEndpoints, PayloadShape};

/// Supplier endpoints expect the DTO wrapped as `{ "supplier": {...} }`.
pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/Supplier")
    .create_payload(PayloadShape::Wrapped("supplier"))
    .update_payload(PayloadShape::Wrapped("supplier"));

pub fn supplier_api() -> EntityApi<Supplier> {
    EntityApi::new(&ENDPOINTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::reference_list::api::build_body;
    use contracts::domain::a001_supplier::SupplierDto;

    #[test]
    fn test_create_body_is_wrapped() {
        let dto = SupplierDto {
            code: "S-01".into(),
            name: "Atlantic Timber".into(),
            ..Default::default()
        };
        let body = build_body(ENDPOINTS.create_payload, &dto).unwrap();
        assert_eq!(body["supplier"]["code"], "S-01");
        assert_eq!(ENDPOINTS.update_url("http://h:3000", 5), "http://h:3000/api/Supplier/Update/5");
    }
}
