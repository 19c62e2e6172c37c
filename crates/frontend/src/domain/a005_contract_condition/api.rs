use contracts::domain::a005_contract_condition::ContractCondition;

use crate::shared::reference_list::{EntityApi, EntityEndpoints, UpdateStrategy};

/// The backend has no update route for contract conditions: an edit
/// deletes the record and creates it again, under a new id.
pub static ENDPOINTS: EntityEndpoints = EntityEndpoints::standard("/api/ContractCondition")
    .update_strategy(UpdateStrategy::RecreateOnUpdate);

pub fn contract_condition_api() -> EntityApi<ContractCondition> {
    EntityApi::new(&ENDPOINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_recreate() {
        assert_eq!(ENDPOINTS.update_strategy, UpdateStrategy::RecreateOnUpdate);
        assert_eq!(ENDPOINTS.delete_url("http://h:3000", 8), "http://h:3000/api/ContractCondition/Delete/8");
    }
}
