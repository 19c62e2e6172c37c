//! Create/edit modal generated from the entity's [`FieldSpec`] table.

use contracts::domain::common::ReferenceEntity;
use contracts::shared::metadata::{FieldKind, FieldSpec};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};
use thaw::*;

use super::api::ReferenceApi;
use super::controller::ReferenceListController;
use crate::shared::modal::Modal;

/// Raw state of one form control
#[derive(Clone, Debug, PartialEq)]
pub enum FieldInput {
    Text(String),
    Flag(bool),
}

/// Control contents for the given form values, in field order.
pub fn initial_inputs(fields: &[FieldSpec], values: &Map<String, Value>) -> Vec<FieldInput> {
    fields
        .iter()
        .map(|field| match field.kind {
            FieldKind::Checkbox => FieldInput::Flag(matches!(values.get(field.key), Some(Value::Bool(true)))),
            _ => FieldInput::Text(FieldKind::display_value(values.get(field.key))),
        })
        .collect()
}

/// Form values from the controls. Blank optional inputs are left out so
/// the DTO falls back to its defaults.
pub fn form_values(fields: &[FieldSpec], inputs: &[FieldInput]) -> Map<String, Value> {
    let mut values = Map::new();
    for (field, input) in fields.iter().zip(inputs) {
        let value = match input {
            FieldInput::Flag(checked) => Value::Bool(*checked),
            FieldInput::Text(raw) => field.kind.parse_input(raw),
        };
        if !value.is_null() {
            values.insert(field.key.to_string(), value);
        }
    }
    values
}

/// Checks required fields, converts the controls into a DTO and runs the
/// entity validation.
pub fn draft_from_inputs<E: ReferenceEntity>(inputs: &[FieldInput]) -> Result<E::Dto, String> {
    let fields = E::form_fields();
    for (field, input) in fields.iter().zip(inputs) {
        if let FieldInput::Text(raw) = input {
            if field.required && raw.trim().is_empty() {
                return Err(format!("{} is required", field.label));
            }
        }
    }
    let dto = E::dto_from_form(&form_values(fields, inputs))?;
    E::validate_dto(&dto)?;
    Ok(dto)
}

#[derive(Clone, Copy)]
enum FieldSignal {
    Text(RwSignal<String>),
    Flag(RwSignal<bool>),
}

impl FieldSignal {
    fn new(input: FieldInput) -> Self {
        match input {
            FieldInput::Text(s) => Self::Text(RwSignal::new(s)),
            FieldInput::Flag(b) => Self::Flag(RwSignal::new(b)),
        }
    }

    fn read(&self) -> FieldInput {
        match self {
            Self::Text(s) => FieldInput::Text(s.get_untracked()),
            Self::Flag(b) => FieldInput::Flag(b.get_untracked()),
        }
    }
}

fn input_type(kind: FieldKind) -> InputType {
    match kind {
        FieldKind::Number => InputType::Number,
        FieldKind::Date => InputType::Date,
        FieldKind::Text | FieldKind::Checkbox => InputType::Text,
    }
}

/// `item = None` creates a new record, `Some` edits it.
#[component]
pub fn ReferenceFormModal<A: ReferenceApi>(
    controller: ReferenceListController<A>,
    item: Option<A::Item>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ui = <A::Item as ReferenceEntity>::ui();
    let fields = <A::Item as ReferenceEntity>::form_fields();
    let edit_id = item.as_ref().map(|i| i.id());

    let title = match &item {
        Some(existing) => format!("{}: {}", ui.element_name, existing.display_name()),
        None => format!("New {}", ui.element_name.to_lowercase()),
    };

    let dto = item.as_ref().map(|i| i.to_dto()).unwrap_or_default();
    let initial = initial_inputs(fields, &<A::Item as ReferenceEntity>::dto_to_form(&dto));
    let signals: Vec<FieldSignal> = initial.into_iter().map(FieldSignal::new).collect();
    let signals = StoredValue::new(signals);

    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let inputs: Vec<FieldInput> = signals.with_value(|s| s.iter().map(|f| f.read()).collect());
        let draft = match draft_from_inputs::<A::Item>(&inputs) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = match edit_id {
                Some(id) => controller.update(id, draft).await,
                None => controller.create(draft).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_close.run(()),
                Err(message) => error.set(Some(message)),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {fields
                .iter()
                .enumerate()
                .map(|(index, field)| {
                    let label = if field.required {
                        format!("{} *", field.label)
                    } else {
                        field.label.to_string()
                    };
                    match signals.with_value(|s| s[index]) {
                        FieldSignal::Flag(checked) => view! {
                            <div class="form__group">
                                <Checkbox checked=checked label=label />
                            </div>
                        }
                        .into_any(),
                        FieldSignal::Text(value) => view! {
                            <div class="form__group">
                                <Label>{label}</Label>
                                <Input
                                    value=value
                                    input_type=input_type(field.kind)
                                    placeholder=field.placeholder
                                    disabled=Signal::derive(move || saving.get())
                                />
                            </div>
                        }
                        .into_any(),
                    }
                })
                .collect_view()}

            <div class="modal-footer">
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| submit()
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_supplier::{Supplier, SupplierDto};
    use contracts::domain::a005_contract_condition::ContractCondition;
    use contracts::domain::a009_arrival::Arrival;

    #[test]
    fn test_round_trip_through_controls() {
        let dto = SupplierDto {
            code: "S-01".into(),
            name: "Atlantic Timber".into(),
            email: Some("ops@atlantic.example".into()),
            ..Default::default()
        };
        let inputs = initial_inputs(Supplier::form_fields(), &Supplier::dto_to_form(&dto));
        assert_eq!(draft_from_inputs::<Supplier>(&inputs), Ok(dto));
    }

    #[test]
    fn test_required_field_reported_by_label() {
        let inputs = initial_inputs(Supplier::form_fields(), &Map::new());
        let err = draft_from_inputs::<Supplier>(&inputs).unwrap_err();
        assert!(err.contains("is required"), "{}", err);
    }

    #[test]
    fn test_blank_optional_number_uses_default() {
        let fields = Arrival::form_fields();
        let inputs: Vec<FieldInput> = fields
            .iter()
            .map(|f| match f.key {
                "reference" => FieldInput::Text("ARR-1".into()),
                "supplier" => FieldInput::Text("Nordic Steel".into()),
                _ => FieldInput::Text(String::new()),
            })
            .collect();
        let dto = draft_from_inputs::<Arrival>(&inputs).unwrap();
        assert_eq!(dto.net_weight_kg, 0.0);
        assert_eq!(dto.arrival_date, None);
        assert_eq!(dto.vessel, None);
    }

    #[test]
    fn test_bad_number_is_rejected() {
        let fields = ContractCondition::form_fields();
        let inputs: Vec<FieldInput> = fields
            .iter()
            .map(|f| match f.kind {
                FieldKind::Checkbox => FieldInput::Flag(true),
                FieldKind::Number => FieldInput::Text("soon".into()),
                _ => FieldInput::Text("NET30".into()),
            })
            .collect();
        assert!(draft_from_inputs::<ContractCondition>(&inputs).is_err());
    }

    #[test]
    fn test_form_values_skip_blank_dates() {
        let fields = [FieldSpec::date("arrival_date", "Arrival date"), FieldSpec::checkbox("is_active", "Active")];
        let values = form_values(&fields, &[FieldInput::Text("  ".into()), FieldInput::Flag(false)]);
        assert!(!values.contains_key("arrival_date"));
        assert_eq!(values["is_active"], Value::Bool(false));
    }
}
