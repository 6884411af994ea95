use std::sync::{Arc, Mutex};

use ui::links::{LinkSpec, NAV_PAGES, reports_follow};
use ui::menu::{
    BREAKPOINT_PX, MenuController, MenuState, RouteEvents, RouteKey, Viewport, navigation_completed,
};

type Store = Arc<Mutex<MenuState>>;

fn mount_at(width: f64, routes: &RouteEvents) -> MenuController<Store> {
    let store: Store = Arc::new(Mutex::new(MenuState::default()));
    MenuController::mount(store, Viewport::from_width(width), routes)
}

#[test]
fn initial_state_tracks_breakpoint() {
    let routes = RouteEvents::new();
    let bp = BREAKPOINT_PX as f64;

    for w in [bp, bp + 1.0, 800.0, 2560.0] {
        assert!(mount_at(w, &routes).is_open(), "{w}px should start open");
    }
    for w in [0.0, 320.0, bp - 1.0] {
        assert!(!mount_at(w, &routes).is_open(), "{w}px should start closed");
    }
}

#[test]
fn route_change_closes_regardless_of_prior_state() {
    let routes = RouteEvents::new();
    let open = mount_at(1024.0, &routes);
    let closed = mount_at(375.0, &routes);

    routes.emit_complete("/projects");

    assert!(!open.is_open());
    assert!(!closed.is_open());
}

#[test]
fn widening_reopens_a_manually_closed_menu() {
    let routes = RouteEvents::new();
    let menu = mount_at(375.0, &routes);

    menu.toggle();
    menu.toggle();
    assert!(!menu.is_open());

    menu.viewport_changed(Viewport::Wide);
    assert!(menu.is_open());
}

#[test]
fn shrinking_from_desktop_keeps_menu_open_until_user_acts() {
    let routes = RouteEvents::new();
    let menu = mount_at(800.0, &routes);

    menu.viewport_changed(Viewport::from_width(400.0));
    assert!(menu.is_open());

    routes.emit_complete("/");
    assert!(!menu.is_open());
}

#[test]
fn no_state_change_after_unmount() {
    let routes = RouteEvents::new();
    let menu = mount_at(375.0, &routes);
    menu.toggle();
    let before = menu.state();

    menu.unmount();
    assert_eq!(routes.listener_count(), 0);

    routes.emit_complete("/projects");
    assert_eq!(menu.state(), before);
}

#[test]
fn remount_leaves_exactly_one_live_listener() {
    let routes = RouteEvents::new();

    let first = mount_at(375.0, &routes);
    first.unmount();

    let second = mount_at(375.0, &routes);
    second.toggle();
    assert_eq!(routes.listener_count(), 1);

    routes.emit_complete("/");
    assert!(!second.is_open());

    second.unmount();
    second.unmount();
    assert_eq!(routes.listener_count(), 0);
}

#[test]
fn dropping_every_handle_releases_the_listener() {
    let routes = RouteEvents::new();
    {
        let menu = mount_at(800.0, &routes);
        let _clone = menu.clone();
        assert_eq!(routes.listener_count(), 1);
    }
    assert_eq!(routes.listener_count(), 0);
}

/// What `SiteLink` does on click: report the follow unless the router will.
fn tap(menu: &MenuController<Store>, link: &LinkSpec, current_path: &str) {
    if reports_follow(link, current_path) {
        menu.link_followed();
    }
}

/// What the router bridge does when the location settles.
fn settle(routes: &RouteEvents, prev: &RouteKey, now: &RouteKey) {
    if navigation_completed(Some(prev), now) {
        routes.emit_complete(&now.path);
    }
}

#[test]
fn tapping_the_current_page_closes_the_menu() {
    let routes = RouteEvents::new();
    let menu = mount_at(375.0, &routes);
    menu.toggle();
    assert!(menu.is_open());

    let home = NAV_PAGES[0];
    assert_eq!(home.href, "/");

    // the URL stays "/", so the bridge has nothing to report
    let here = RouteKey::new("/", "", "");
    settle(&routes, &here, &here.clone());
    assert!(menu.is_open());

    tap(&menu, &home, "/");
    assert!(!menu.is_open());
}

#[test]
fn query_only_navigation_closes_the_menu() {
    let routes = RouteEvents::new();
    let menu = mount_at(375.0, &routes);
    menu.toggle();

    settle(
        &routes,
        &RouteKey::new("/projects", "", ""),
        &RouteKey::new("/projects", "?tag=rust", ""),
    );
    assert!(!menu.is_open());
}

#[test]
fn tapping_another_page_is_left_to_the_router() {
    let routes = RouteEvents::new();
    let menu = mount_at(375.0, &routes);
    menu.toggle();

    let projects = NAV_PAGES[1];
    tap(&menu, &projects, "/");
    assert!(menu.is_open());

    settle(&routes, &RouteKey::new("/", "", ""), &RouteKey::new(projects.href, "", ""));
    assert!(!menu.is_open());
}
