use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Blocking yes/no confirmation shown before destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    /// Label of the confirm button
    #[prop(optional, into)]
    confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal title=title on_close=on_cancel>
            <p class="confirm-dialog__message">{message}</p>
            <div class="modal-footer">
                <Flex justify=FlexJustify::End gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </Button>
                </Flex>
            </div>
        </Modal>
    }
}
