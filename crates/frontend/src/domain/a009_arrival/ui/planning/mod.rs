//! Planning agenda: arrivals with a date, grouped by day.

use contracts::domain::a009_arrival::Arrival;
use contracts::shared::calendar::{group_by_day, CalendarEvent};
use contracts::shared::pagination::{total_pages, PageRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_arrival::api::arrival_api;
use crate::shared::api_client::{ApiError, Operation};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use crate::shared::reference_list::ReferenceApi;

/// Arrivals fetched per request while building the agenda
const PLANNING_PAGE_SIZE: usize = 200;

/// Every arrival, fetched page by page until `total_items` is reached.
pub async fn fetch_all_arrivals<A>(api: &A) -> Result<Vec<Arrival>, ApiError>
where
    A: ReferenceApi<Item = Arrival>,
{
    let first = api.fetch_page(&PageRequest::new(1, PLANNING_PAGE_SIZE)).await?;
    let pages = total_pages(first.total_items, PLANNING_PAGE_SIZE);
    let mut arrivals = first.items;

    for page in 2..=pages {
        let next = api.fetch_page(&PageRequest::new(page, PLANNING_PAGE_SIZE)).await?;
        if next.items.is_empty() {
            // The list shrank while paging
            break;
        }
        arrivals.extend(next.items);
    }
    Ok(arrivals)
}

/// Calendar events of the dated arrivals.
pub fn planning_events(arrivals: &[Arrival]) -> Vec<CalendarEvent> {
    arrivals.iter().filter_map(Arrival::to_calendar_event).collect()
}

fn prop_text(event: &CalendarEvent, key: &str) -> String {
    event
        .extended_props
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

#[component]
pub fn ArrivalPlanning() -> impl IntoView {
    let (events, set_events) = signal(Vec::<CalendarEvent>::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match fetch_all_arrivals(&arrival_api()).await {
                Ok(arrivals) => {
                    set_events.set(planning_events(&arrivals));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("a009_arrival planning: failed to load arrivals: {}", e);
                    set_error.set(Some(e.user_message(Operation::Load)));
                }
            }
            set_loading.set(false);
        });
    };

    load();

    view! {
        <PageFrame page_id="a009_arrival_planning--custom" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("calendar")}
                    <h1 class="page__title">"Planning"</h1>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content planning">
                {move || {
                    if loading.get() {
                        return view! { <Spinner /> }.into_any();
                    }
                    if let Some(e) = error.get() {
                        return view! { <div class="alert alert--error">{e}</div> }.into_any();
                    }
                    let groups = group_by_day(&events.get());
                    if groups.is_empty() {
                        return view! { <p class="planning__empty">"No planned arrivals"</p> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(day, day_events)| view! {
                            <section class="planning__day">
                                <h3 class="planning__date">{day.format("%A %d.%m.%Y").to_string()}</h3>
                                <ul class="planning__events">
                                    {day_events
                                        .into_iter()
                                        .map(|event| {
                                            let status = prop_text(&event, "status");
                                            let vessel = prop_text(&event, "vessel");
                                            view! {
                                                <li class="planning__event" data-status=status>
                                                    <span class="planning__time">{event.start.format("%H:%M").to_string()}</span>
                                                    <span class="planning__title">{event.title}</span>
                                                    {(!vessel.is_empty()).then(|| view! {
                                                        <span class="planning__vessel">{vessel}</span>
                                                    })}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </section>
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </PageFrame>
    }
}
