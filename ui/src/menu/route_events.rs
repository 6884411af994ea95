//! Route-change notifications.
//!
//! `RouteEvents` is a tiny pub/sub hub fed by the router bridge whenever a
//! client-side navigation completes. Subscribers hold a [`RouteSubscription`];
//! dropping it (or calling [`RouteSubscription::cancel`]) removes the handler
//! synchronously, so nothing fires for a component that already unmounted.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Handler = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(h, _)| *h == id)
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Everything about the current URL that a navigation can change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteKey {
    pub path: String,
    pub search: String,
    pub hash: String,
}

impl RouteKey {
    pub fn new(path: impl Into<String>, search: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            search: search.into(),
            hash: hash.into(),
        }
    }
}

/// Whether moving from `prev` to `now` is a completed navigation. The first
/// observation is the page load, not a navigation.
pub fn navigation_completed(prev: Option<&RouteKey>, now: &RouteKey) -> bool {
    prev.is_some_and(|p| p != now)
}

#[derive(Clone, Default)]
pub struct RouteEvents {
    registry: Arc<Mutex<Registry>>,
}

impl RouteEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every completed navigation. It receives the new path.
    #[must_use = "the handler is removed as soon as the subscription is dropped"]
    pub fn subscribe(&self, handler: impl Fn(&str) + Send + Sync + 'static) -> RouteSubscription {
        let mut reg = lock(&self.registry);
        let id = reg.next_id;
        reg.next_id += 1;
        reg.handlers.push((id, Arc::new(handler)));

        RouteSubscription {
            id,
            registry: Arc::downgrade(&self.registry),
            active: true,
        }
    }

    /// Notifies every live subscriber that navigation to `path` completed.
    pub fn emit_complete(&self, path: &str) {
        // snapshot so handlers can (un)subscribe while we dispatch
        let snapshot: Vec<(u64, Handler)> = lock(&self.registry).handlers.clone();

        for (id, handler) in snapshot {
            if lock(&self.registry).contains(id) {
                handler(path);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

/// Keeps a route handler registered for as long as it lives.
pub struct RouteSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
    active: bool,
}

impl RouteSubscription {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Deregisters the handler. Safe to call more than once.
    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.retain(|(h, _)| *h != self.id);
        }
    }
}

impl Drop for RouteSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn(&str) + Send + Sync + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = hits.clone();
        (hits, move |_: &str| {
            h.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn page_load_is_not_a_navigation() {
        assert!(!navigation_completed(None, &RouteKey::new("/", "", "")));
    }

    #[test]
    fn query_or_hash_change_counts_as_navigation() {
        let home = RouteKey::new("/projects", "", "");
        assert!(navigation_completed(Some(&home), &RouteKey::new("/projects", "?tag=rust", "")));
        assert!(navigation_completed(Some(&home), &RouteKey::new("/projects", "", "#synth")));
        assert!(navigation_completed(Some(&home), &RouteKey::new("/", "", "")));
        assert!(!navigation_completed(Some(&home), &home.clone()));
    }

    #[test]
    fn delivers_path_to_subscribers() {
        let events = RouteEvents::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let s = seen.clone();
        let _sub = events.subscribe(move |p| s.lock().unwrap().push(p.to_owned()));

        events.emit_complete("/projects");
        events.emit_complete("/");

        assert_eq!(*seen.lock().unwrap(), vec!["/projects", "/"]);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let events = RouteEvents::new();
        let (hits, handler) = counter();

        let sub = events.subscribe(handler);
        events.emit_complete("/a");
        drop(sub);
        events.emit_complete("/b");

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(events.listener_count(), 0);
    }

    #[test]
    fn cancel_is_idempotent_and_only_removes_its_own_handler() {
        let events = RouteEvents::new();
        let (a_hits, a) = counter();
        let (b_hits, b) = counter();

        let mut sub_a = events.subscribe(a);
        let _sub_b = events.subscribe(b);
        assert_eq!(events.listener_count(), 2);

        sub_a.cancel();
        sub_a.cancel();
        assert!(!sub_a.is_active());
        assert_eq!(events.listener_count(), 1);

        events.emit_complete("/");
        assert_eq!(a_hits.load(Ordering::SeqCst), 0);
        assert_eq!(b_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_cancelled_mid_dispatch_does_not_fire() {
        let events = RouteEvents::new();
        let victim: Arc<Mutex<Option<RouteSubscription>>> = Arc::new(Mutex::new(None));

        let v = victim.clone();
        let _killer = events.subscribe(move |_| {
            v.lock().unwrap().take();
        });

        let (hits, handler) = counter();
        *victim.lock().unwrap() = Some(events.subscribe(handler));

        events.emit_complete("/");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_hub_drops_cleanly() {
        let events = RouteEvents::new();
        let (_, handler) = counter();
        let mut sub = events.subscribe(handler);
        drop(events);
        sub.cancel();
        assert!(!sub.is_active());
    }
}
