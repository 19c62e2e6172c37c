//! Generic list screen: header, search and status filter, table with
//! row actions, pagination, and the create/edit/delete modals.

use std::sync::Arc;

use contracts::domain::common::{ReferenceEntity, StatusFilterMode};
use contracts::shared::pagination::StatusFilter;
use leptos::prelude::*;
use thaw::*;

use super::api::ReferenceApi;
use super::controller::ReferenceListController;
use super::form_modal::ReferenceFormModal;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// One table column of a list screen
pub struct Column<T> {
    pub title: &'static str,
    pub min_width: f64,
    render: Arc<dyn Fn(&T) -> AnyView + Send + Sync>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title,
            min_width: self.min_width,
            render: self.render.clone(),
        }
    }
}

impl<T: 'static> Column<T> {
    pub fn new(
        title: &'static str,
        min_width: f64,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            title,
            min_width,
            render: Arc::new(render),
        }
    }

    /// Plain text cell; empty values are shown as a dash.
    pub fn text(
        title: &'static str,
        min_width: f64,
        value: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(title, min_width, move |item| {
            let text = value(item);
            let text = if text.trim().is_empty() { "—".to_string() } else { text };
            view! { <TableCellLayout truncate=true>{text}</TableCellLayout> }.into_any()
        })
    }

    pub fn render(&self, item: &T) -> AnyView {
        (self.render)(item)
    }
}

impl<T: ReferenceEntity> Column<T> {
    /// Active/inactive badge from [`ReferenceEntity::is_active`].
    pub fn status(title: &'static str) -> Self {
        Self::new(title, 90.0, |item: &T| match item.is_active() {
            Some(true) => view! {
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge>
            }
            .into_any(),
            Some(false) => view! {
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Inactive"</Badge>
            }
            .into_any(),
            None => view! { <span>"—"</span> }.into_any(),
        })
    }
}

/// Title and minimum width of every column header.
fn header_cells<T>(columns: &[Column<T>]) -> Vec<(&'static str, f64)> {
    columns.iter().map(|col| (col.title, col.min_width)).collect()
}

#[derive(Clone)]
enum FormTarget<T> {
    Create,
    Edit(T),
}

#[component]
pub fn ReferenceListView<A: ReferenceApi>(
    controller: ReferenceListController<A>,
    columns: Vec<Column<A::Item>>,
    /// `"{entity}--list"`
    page_id: &'static str,
    /// Text of the empty-state row
    #[prop(optional, into)]
    empty_message: Option<String>,
) -> impl IntoView {
    let ui = <A::Item as ReferenceEntity>::ui();
    let status_mode = <A::Item as ReferenceEntity>::status_filter_mode();
    let config = use_config();
    let state = controller.state();

    let empty_message = empty_message.unwrap_or_else(|| format!("No {} found", ui.list_name.to_lowercase()));
    let columns = StoredValue::new(columns);
    let column_count = columns.with_value(|c| c.len()) + 1;

    let search = RwSignal::new(String::new());
    let status_value = RwSignal::new(StatusFilter::to_select_value(None).to_string());
    let form_target = RwSignal::new(None::<FormTarget<A::Item>>);
    let pending_delete = RwSignal::new(None::<A::Item>);

    // Select changes are applied immediately
    Effect::new(move |_| {
        let value = status_value.get();
        controller.spawn_status_filter(StatusFilter::from_select_value(&value));
    });

    let apply_search = move || controller.spawn_search(search.get_untracked().trim().to_string());
    let reset_search = move || {
        search.set(String::new());
        controller.spawn_search(String::new());
    };

    let body = move || {
        let (loading, loaded, error, items) =
            state.with(|s| (s.loading, s.is_loaded, s.error.clone(), s.items.clone()));

        if let Some(error) = error {
            return view! {
                <TableRow>
                    <td class="table__error" colspan=column_count>
                        <div class="alert alert--error">{error}</div>
                    </td>
                </TableRow>
            }
            .into_any();
        }
        if loading && !loaded {
            return view! {
                <TableRow>
                    <td class="table__loading" colspan=column_count>
                        <Spinner />
                    </td>
                </TableRow>
            }
            .into_any();
        }
        if items.is_empty() {
            let message = empty_message.clone();
            return view! {
                <TableRow>
                    <td class="table__empty" colspan=column_count>{message}</td>
                </TableRow>
            }
            .into_any();
        }

        items
            .into_iter()
            .map(|item| {
                let for_edit = item.clone();
                let for_delete = item.clone();
                let rendered: Vec<AnyView> =
                    columns.with_value(|cols| cols.iter().map(|col| col.render(&item)).collect());
                let cells = rendered
                    .into_iter()
                    .map(|cell| view! { <TableCell>{cell}</TableCell> })
                    .collect_view();
                view! {
                    <TableRow>
                        {cells}
                        <TableCell>
                            <Flex gap=FlexGap::Small>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| form_target.set(Some(FormTarget::Edit(for_edit.clone())))
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    size=ButtonSize::Small
                                    on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                >
                                    {icon("delete")}
                                </Button>
                            </Flex>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(ui.icon)}
                    <h1 class="page__title">{ui.list_name}</h1>
                    {move || {
                        let loading = state.with(|s| s.loading && s.is_loaded);
                        loading.then(|| view! { <Spinner size=SpinnerSize::Tiny /> })
                    }}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form_target.set(Some(FormTarget::Create))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| controller.spawn_refresh()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <div
                            style="width: 320px;"
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    apply_search();
                                }
                            }
                        >
                            <Input value=search placeholder="Search..." />
                        </div>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                            "Find"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| reset_search()>
                            "Reset"
                        </Button>
                        {(status_mode != StatusFilterMode::Unsupported).then(|| view! {
                            <Select value=status_value>
                                <option value="all">"All"</option>
                                <option value="active">"Active"</option>
                                <option value="inactive">"Inactive"</option>
                            </Select>
                        })}
                    </Flex>
                </div>

                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns.with_value(|cols| header_cells(cols))
                                .into_iter()
                                .map(|(title, min_width)| view! {
                                    <TableHeaderCell resizable=true min_width=min_width>
                                        {title}
                                    </TableHeaderCell>
                                })
                                .collect_view()}
                            <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{body}</TableBody>
                </Table>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.current_page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_items))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page: usize| controller.spawn_set_page(page))
                    on_page_size_change=Callback::new(move |size: usize| controller.spawn_page_size(size))
                    page_size_options=config.page_size_options.clone()
                />
            </div>

            {move || form_target.get().map(|target| {
                let item = match target {
                    FormTarget::Create => None,
                    FormTarget::Edit(item) => Some(item),
                };
                view! {
                    <ReferenceFormModal
                        controller=controller
                        item=item
                        on_close=Callback::new(move |_| form_target.set(None))
                    />
                }
            })}

            {move || pending_delete.get().map(|item| {
                let id = item.id();
                let message = format!(
                    "Delete {} \"{}\"? This cannot be undone.",
                    ui.element_name.to_lowercase(),
                    item.display_name()
                );
                view! {
                    <ConfirmDialog
                        title=format!("Delete {}", ui.element_name.to_lowercase())
                        message=message
                        on_confirm=Callback::new(move |_| {
                            pending_delete.set(None);
                            controller.spawn_remove(id);
                        })
                        on_cancel=Callback::new(move |_| pending_delete.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
