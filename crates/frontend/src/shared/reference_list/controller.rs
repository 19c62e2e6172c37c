//! Generic list controller: one per mounted list screen.
//!
//! Holds the [`ListState`] signal and the entity's [`ReferenceApi`], and
//! drives every transition: load, page change, search, status filter,
//! refresh after mutations. Errors never leave the controller; screens
//! only observe `loading`, `error` and the notifications.

use contracts::domain::common::ReferenceEntity;
use contracts::shared::pagination::{PageSlot, StatusFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{DtoOf, ReferenceApi};
use super::state::{ListState, LoadOutcome};
use crate::shared::api_client::{ApiError, Operation};
use crate::shared::config::use_config;
use crate::shared::notifications::{use_notifications, NotificationService};

/// Bound on consecutive clamp-and-reload rounds when the list keeps
/// shrinking under us.
const MAX_CLAMP_RELOADS: usize = 2;

pub struct ReferenceListController<A: ReferenceApi> {
    api: StoredValue<A>,
    state: RwSignal<ListState<A::Item>>,
    notifications: NotificationService,
}

impl<A: ReferenceApi> Clone for ReferenceListController<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ReferenceApi> Copy for ReferenceListController<A> {}

impl<A: ReferenceApi> ReferenceListController<A> {
    pub fn new(api: A, page_size: usize, notifications: NotificationService) -> Self {
        Self {
            api: StoredValue::new(api),
            state: RwSignal::new(ListState::new(page_size)),
            notifications,
        }
    }

    pub fn state(&self) -> RwSignal<ListState<A::Item>> {
        self.state
    }

    // ============================================================================
    // Read accessors (tracked)
    // ============================================================================

    pub fn items(&self) -> Vec<A::Item> {
        self.state.with(|s| s.items.clone())
    }

    pub fn page(&self) -> usize {
        self.state.with(|s| s.current_page)
    }

    pub fn total_pages(&self) -> usize {
        self.state.with(|s| s.total_pages)
    }

    pub fn total_items(&self) -> usize {
        self.state.with(|s| s.total_items)
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn window(&self) -> Vec<PageSlot> {
        self.state.with(|s| s.window())
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.with(|s| s.can_go_prev())
    }

    pub fn can_go_next(&self) -> bool {
        self.state.with(|s| s.can_go_next())
    }

    // ============================================================================
    // Loading
    // ============================================================================

    /// Loads `page`. A response that arrives after a newer load was
    /// dispatched is dropped.
    pub async fn load(&self, page: usize) {
        let Some(api) = self.api.try_get_value() else {
            return;
        };
        let entity = <A::Item as ReferenceEntity>::full_name();
        let mut page = page;

        for _ in 0..=MAX_CLAMP_RELOADS {
            let Some(ticket) = self.state.try_update(|s| s.begin_load(page)) else {
                return;
            };

            let result = api.fetch_page(&ticket.request).await.map_err(|e| {
                log::error!("{}: failed to load page {}: {}", entity, ticket.request.page_number, e);
                e.user_message(Operation::Load)
            });

            match self.state.try_update(|s| s.apply(ticket.seq, result)) {
                Some(LoadOutcome::OutOfRange { last_page }) => {
                    log::debug!("{}: page {} is past the end, reloading page {}", entity, page, last_page);
                    page = last_page;
                }
                Some(LoadOutcome::Stale) => {
                    log::debug!("{}: dropped stale response #{}", entity, ticket.seq);
                    return;
                }
                _ => return,
            }
        }
    }

    pub async fn refresh(&self) {
        let Some(page) = self.state.try_with_untracked(|s| s.current_page) else {
            return;
        };
        self.load(page).await;
    }

    /// No clamping here: the pagination controls never offer an
    /// out-of-range page.
    pub async fn set_page(&self, page: usize) {
        self.load(page).await;
    }

    pub async fn set_search_term(&self, term: String) {
        if self.state.try_update(|s| s.set_search_term(&term)) == Some(true) {
            self.load(1).await;
        }
    }

    pub async fn set_status_filter(&self, filter: Option<StatusFilter>) {
        if self.state.try_update(|s| s.set_status_filter(filter)) == Some(true) {
            self.load(1).await;
        }
    }

    pub async fn set_page_size(&self, page_size: usize) {
        if self.state.try_update(|s| s.set_page_size(page_size)) == Some(true) {
            self.load(1).await;
        }
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Deletes the record, then reloads the current page. On failure the
    /// list is left as is and an error notification is shown.
    pub async fn remove(&self, id: i64) -> bool {
        let Some(api) = self.api.try_get_value() else {
            return false;
        };
        let label = self
            .state
            .try_with_untracked(|s| {
                s.items
                    .iter()
                    .find(|item| item.id() == id)
                    .map(|item| item.display_name())
            })
            .flatten()
            .unwrap_or_else(|| format!("#{}", id));

        match api.remove(id).await {
            Ok(()) => {
                self.notifications
                    .success(format!("{} \"{}\" deleted", Self::element_name(), label));
                self.refresh().await;
                true
            }
            Err(e) => {
                log::error!("{}: failed to delete #{}: {}", <A::Item as ReferenceEntity>::full_name(), id, e);
                self.notifications.error(e.user_message(Operation::Delete));
                false
            }
        }
    }

    /// Creates a record. The error message is returned so the form can
    /// stay open.
    pub async fn create(&self, draft: DtoOf<A>) -> Result<(), String> {
        let Some(api) = self.api.try_get_value() else {
            return Err(String::from("List is no longer mounted"));
        };
        match api.create(&draft).await {
            Ok(()) => {
                self.notifications
                    .success(format!("{} created", Self::element_name()));
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                log::error!("{}: failed to create: {}", <A::Item as ReferenceEntity>::full_name(), e);
                let message = e.user_message(Operation::Create);
                self.notifications.error(message.clone());
                Err(message)
            }
        }
    }

    pub async fn update(&self, id: i64, draft: DtoOf<A>) -> Result<(), String> {
        let Some(api) = self.api.try_get_value() else {
            return Err(String::from("List is no longer mounted"));
        };
        match api.update(id, &draft).await {
            Ok(()) => {
                self.notifications
                    .success(format!("{} saved", Self::element_name()));
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                log::error!("{}: failed to update #{}: {}", <A::Item as ReferenceEntity>::full_name(), id, e);
                let message = e.user_message(Operation::Update);
                self.notifications.error(message.clone());
                // The old row is gone on the server
                if matches!(e, ApiError::PartialUpdate { .. }) {
                    self.refresh().await;
                }
                Err(message)
            }
        }
    }

    fn element_name() -> &'static str {
        <A::Item as ReferenceEntity>::ui().element_name
    }

    // ============================================================================
    // Fire-and-forget wrappers for event handlers
    // ============================================================================

    pub fn spawn_refresh(&self) {
        let this = *self;
        spawn_local(async move { this.refresh().await });
    }

    pub fn spawn_set_page(&self, page: usize) {
        let this = *self;
        spawn_local(async move { this.set_page(page).await });
    }

    pub fn spawn_search(&self, term: String) {
        let this = *self;
        spawn_local(async move { this.set_search_term(term).await });
    }

    pub fn spawn_status_filter(&self, filter: Option<StatusFilter>) {
        let this = *self;
        spawn_local(async move { this.set_status_filter(filter).await });
    }

    pub fn spawn_page_size(&self, page_size: usize) {
        let this = *self;
        spawn_local(async move { this.set_page_size(page_size).await });
    }

    pub fn spawn_remove(&self, id: i64) {
        let this = *self;
        spawn_local(async move {
            this.remove(id).await;
        });
    }
}

/// Controller for a list screen, with page size and notifications from
/// context. The first page is loaded once the screen is mounted.
pub fn use_reference_list<A: ReferenceApi>(api: A) -> ReferenceListController<A> {
    let config = use_config();
    let controller = ReferenceListController::new(api, config.default_page_size, use_notifications());

    Effect::new(move |_| {
        let loaded = controller
            .state
            .try_with_untracked(|s| s.is_loaded || s.loading)
            .unwrap_or(true);
        if !loaded {
            controller.spawn_refresh();
        }
    });

    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiError;
    use crate::shared::reference_list::api::recreate;
    use contracts::domain::a007_quality::{Quality, QualityDto};
    use contracts::shared::pagination::{PageRequest, PageResponse};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Backend {
        rows: Vec<Quality>,
        requests: Vec<PageRequest>,
        fail_fetch: bool,
        fail_writes: bool,
        fail_creates: bool,
        recreate_on_update: bool,
        next_id: i64,
    }

    #[derive(Clone, Default)]
    struct MockApi {
        backend: Arc<Mutex<Backend>>,
    }

    impl MockApi {
        fn with_rows(count: i64) -> Self {
            let api = MockApi::default();
            {
                let mut backend = api.backend.lock().unwrap();
                backend.rows = (1..=count)
                    .map(|id| Quality {
                        id,
                        name: format!("Grade {}", id),
                        is_active: id % 2 == 1,
                    })
                    .collect();
                backend.next_id = count + 1;
            }
            api
        }

        fn fetch_count(&self) -> usize {
            self.backend.lock().unwrap().requests.len()
        }

        fn last_request(&self) -> PageRequest {
            self.backend.lock().unwrap().requests.last().cloned().unwrap()
        }
    }

    impl ReferenceApi for MockApi {
        type Item = Quality;

        async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<Quality>, ApiError> {
            let mut backend = self.backend.lock().unwrap();
            backend.requests.push(request.clone());
            if backend.fail_fetch {
                return Err(ApiError::Http { status: 500 });
            }
            let matching: Vec<Quality> = backend
                .rows
                .iter()
                .filter(|q| match request.trimmed_search() {
                    Some(term) => q.name.contains(term),
                    None => true,
                })
                .cloned()
                .collect();
            let total = matching.len();
            let items = matching
                .into_iter()
                .skip((request.page_number - 1) * request.page_size)
                .take(request.page_size)
                .collect();
            Ok(PageResponse::new(items, total))
        }

        async fn create(&self, draft: &QualityDto) -> Result<(), ApiError> {
            let mut backend = self.backend.lock().unwrap();
            if backend.fail_writes || backend.fail_creates {
                return Err(ApiError::Network("offline".into()));
            }
            let id = backend.next_id;
            backend.next_id += 1;
            backend.rows.push(Quality {
                id,
                name: draft.name.clone(),
                is_active: draft.is_active,
            });
            Ok(())
        }

        async fn update(&self, id: i64, draft: &QualityDto) -> Result<(), ApiError> {
            if self.backend.lock().unwrap().recreate_on_update {
                return recreate(id, self.remove(id), self.create(draft)).await;
            }
            let mut backend = self.backend.lock().unwrap();
            if backend.fail_writes {
                return Err(ApiError::Network("offline".into()));
            }
            match backend.rows.iter_mut().find(|q| q.id == id) {
                Some(row) => {
                    row.name = draft.name.clone();
                    row.is_active = draft.is_active;
                    Ok(())
                }
                None => Err(ApiError::Http { status: 404 }),
            }
        }

        async fn remove(&self, id: i64) -> Result<(), ApiError> {
            let mut backend = self.backend.lock().unwrap();
            if backend.fail_writes {
                return Err(ApiError::Http { status: 500 });
            }
            backend.rows.retain(|q| q.id != id);
            Ok(())
        }
    }

    fn setup(api: &MockApi, page_size: usize) -> (Owner, ReferenceListController<MockApi>, NotificationService) {
        let owner = Owner::new();
        owner.set();
        let notifications = NotificationService::new();
        let controller = ReferenceListController::new(api.clone(), page_size, notifications);
        (owner, controller, notifications)
    }

    fn snapshot(controller: &ReferenceListController<MockApi>) -> ListState<Quality> {
        controller.state().get_untracked()
    }

    #[tokio::test]
    async fn test_load_computes_pages() {
        let api = MockApi::with_rows(23);
        let (_owner, controller, _) = setup(&api, 10);

        controller.load(1).await;
        let state = snapshot(&controller);
        assert_eq!(state.items.len(), 10);
        assert_eq!(state.total_items, 23);
        assert_eq!(state.total_pages, 3);
        assert!(!state.loading);

        controller.set_page(3).await;
        let state = snapshot(&controller);
        assert_eq!(state.current_page, 3);
        assert_eq!(state.items.len(), 3);
        assert!(!controller.can_go_next());
        assert!(controller.can_go_prev());
        assert_eq!(controller.page(), 3);
        assert_eq!(
            controller.window(),
            vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]
        );
    }

    #[tokio::test]
    async fn test_empty_backend() {
        let api = MockApi::with_rows(0);
        let (_owner, controller, _) = setup(&api, 10);

        controller.load(1).await;
        let state = snapshot(&controller);
        assert!(state.items.is_empty());
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_load_failure_sets_generic_error() {
        let api = MockApi::with_rows(5);
        let (_owner, controller, _) = setup(&api, 10);
        controller.load(1).await;

        api.backend.lock().unwrap().fail_fetch = true;
        controller.refresh().await;
        let state = snapshot(&controller);
        assert_eq!(state.error.as_deref(), Some("Failed to load data"));
        assert!(state.items.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_search_resets_to_first_page() {
        let api = MockApi::with_rows(30);
        let (_owner, controller, _) = setup(&api, 10);
        controller.set_page(3).await;

        controller.set_search_term("Grade 2".into()).await;
        let request = api.last_request();
        assert_eq!(request.page_number, 1);
        assert_eq!(request.search_term, "Grade 2");
        // "Grade 2" and "Grade 20".."Grade 29"
        assert_eq!(snapshot(&controller).total_items, 11);

        let before = api.fetch_count();
        controller.set_search_term("Grade 2".into()).await;
        assert_eq!(api.fetch_count(), before);
    }

    #[tokio::test]
    async fn test_client_status_filter() {
        let api = MockApi::with_rows(10);
        let (_owner, controller, _) = setup(&api, 10);
        controller.load(1).await;

        controller.set_status_filter(Some(StatusFilter::Active)).await;
        assert_eq!(api.last_request().status_filter, None);
        let state = snapshot(&controller);
        assert_eq!(state.items.len(), 5);
        assert!(state.items.iter().all(|q| q.is_active));
        assert_eq!(state.total_items, 5);
        assert_eq!(state.total_pages, 1);
    }

    #[tokio::test]
    async fn test_remove_success_refreshes() {
        let api = MockApi::with_rows(3);
        let (_owner, controller, notifications) = setup(&api, 10);
        controller.load(1).await;
        let before = api.fetch_count();

        assert!(controller.remove(2).await);
        assert_eq!(api.fetch_count(), before + 1);
        assert_eq!(snapshot(&controller).items.len(), 2);
        let toasts = notifications.items.get_untracked();
        assert_eq!(toasts[0].message, "Quality \"Grade 2\" deleted");
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_state() {
        let api = MockApi::with_rows(3);
        let (_owner, controller, notifications) = setup(&api, 10);
        controller.load(1).await;
        let items_before = snapshot(&controller).items;
        let fetches_before = api.fetch_count();

        api.backend.lock().unwrap().fail_writes = true;
        assert!(!controller.remove(2).await);

        assert_eq!(snapshot(&controller).items, items_before);
        assert_eq!(api.fetch_count(), fetches_before);
        let toasts = notifications.items.get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Failed to delete the record");
    }

    #[tokio::test]
    async fn test_delete_last_row_of_last_page_clamps() {
        let api = MockApi::with_rows(21);
        let (_owner, controller, _) = setup(&api, 10);
        controller.set_page(3).await;
        assert_eq!(snapshot(&controller).items.len(), 1);

        assert!(controller.remove(21).await);
        let state = snapshot(&controller);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.items.len(), 10);
        assert_eq!(api.last_request().page_number, 2);
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let api = MockApi::with_rows(1);
        let (_owner, controller, notifications) = setup(&api, 10);
        controller.load(1).await;

        let draft = QualityDto {
            name: "Extra".into(),
            is_active: true,
        };
        assert_eq!(controller.create(draft.clone()).await, Ok(()));
        assert_eq!(snapshot(&controller).total_items, 2);

        let renamed = QualityDto {
            name: "Extra fine".into(),
            ..draft
        };
        assert_eq!(controller.update(2, renamed.clone()).await, Ok(()));
        assert!(snapshot(&controller).items.iter().any(|q| q.name == "Extra fine"));

        let missing = controller.update(99, renamed).await;
        assert_eq!(missing, Err("Failed to save the record: it no longer exists".to_string()));
        let messages: Vec<String> = notifications
            .items
            .get_untracked()
            .into_iter()
            .map(|n| n.message)
            .collect();
        assert_eq!(messages[0], "Quality created");
        assert_eq!(messages[1], "Quality saved");
    }

    #[tokio::test]
    async fn test_failed_recreate_reloads_the_list() {
        let api = MockApi::with_rows(3);
        let (_owner, controller, notifications) = setup(&api, 10);
        controller.load(1).await;
        let before = api.fetch_count();
        {
            let mut backend = api.backend.lock().unwrap();
            backend.recreate_on_update = true;
            backend.fail_creates = true;
        }

        let draft = QualityDto {
            name: "Grade 2 bis".into(),
            is_active: true,
        };
        let result = controller.update(2, draft).await;
        assert_eq!(
            result,
            Err("Failed to save the record: the original record was deleted and could not be created again".to_string())
        );

        assert_eq!(api.fetch_count(), before + 1);
        let shown: Vec<i64> = snapshot(&controller).items.iter().map(|q| q.id).collect();
        assert_eq!(shown, vec![1, 3]);
        let toasts = notifications.items.get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, crate::shared::notifications::NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_create_failure_does_not_refresh() {
        let api = MockApi::with_rows(1);
        let (_owner, controller, _) = setup(&api, 10);
        controller.load(1).await;
        let before = api.fetch_count();

        api.backend.lock().unwrap().fail_writes = true;
        let result = controller.create(QualityDto::default()).await;
        assert_eq!(result, Err("Failed to create the record: the server is unreachable".to_string()));
        assert_eq!(api.fetch_count(), before);
    }
}
