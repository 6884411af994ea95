use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::{GetUntracked, RwSignal, Set};

use super::route_events::{RouteEvents, RouteSubscription};
use super::state::{MenuEvent, MenuState};
use super::viewport::Viewport;

/// Where the controller keeps its [`MenuState`]. In the browser this is a
/// `RwSignal` so the view re-renders; anything else works for headless use.
pub trait MenuStore: Clone + Send + Sync + 'static {
    fn load(&self) -> MenuState;
    fn store(&self, state: MenuState);
}

impl MenuStore for RwSignal<MenuState> {
    fn load(&self) -> MenuState {
        self.get_untracked()
    }

    fn store(&self, state: MenuState) {
        self.set(state);
    }
}

impl MenuStore for Arc<Mutex<MenuState>> {
    fn load(&self) -> MenuState {
        *self.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store(&self, state: MenuState) {
        *self.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }
}

/// Drives the nav menu for one mount of the component.
///
/// `mount` seeds the state from the viewport and subscribes to route changes;
/// `unmount` drops that subscription. Clones share the same subscription, so
/// any clone may tear it down.
#[derive(Clone)]
pub struct MenuController<S: MenuStore> {
    store: S,
    route_guard: Arc<Mutex<Option<RouteSubscription>>>,
}

impl<S: MenuStore> MenuController<S> {
    pub fn mount(store: S, viewport: Viewport, routes: &RouteEvents) -> Self {
        store.store(MenuState::initial(viewport));

        let on_route = store.clone();
        let sub = routes.subscribe(move |_path| {
            on_route.store(on_route.load().apply(MenuEvent::RouteChanged));
        });

        Self {
            store,
            route_guard: Arc::new(Mutex::new(Some(sub))),
        }
    }

    /// Releases the route listener. Returns false if it was already released.
    pub fn unmount(&self) -> bool {
        let sub = self
            .route_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        sub.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.route_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(RouteSubscription::is_active)
    }

    pub fn state(&self) -> MenuState {
        self.store.load()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn toggle(&self) {
        self.dispatch(MenuEvent::Toggle);
    }

    pub fn link_followed(&self) {
        self.dispatch(MenuEvent::LinkFollowed);
    }

    pub fn viewport_changed(&self, viewport: Viewport) {
        self.dispatch(MenuEvent::ViewportChanged(viewport));
    }

    fn dispatch(&self, event: MenuEvent) {
        let next = self.store.load().apply(event);
        self.store.store(next);
    }
}
