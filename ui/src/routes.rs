use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::menu::{RouteEvents, RouteKey, navigation_completed};
use crate::pages::{home::Home, not_found::NotFound, projects::Projects, section::Section};

/// Every in-app path with a real page behind it.
pub const PAGE_PATHS: &[&str] = &[
    "/",
    "/projects",
    "/podcast",
    "/works",
    "/about",
    "/synth",
    "/dad-jokes",
];

#[component]
pub fn SiteRoutes() -> impl IntoView {
    view! {
      <Routes fallback=NotFound>
        <Route path=path!("")           view=Home     />
        <Route path=path!("/projects")  view=Projects />
        <Route path=path!("/podcast")   view=|| view! { <Section title="Podcast"/> }   />
        <Route path=path!("/works")     view=|| view! { <Section title="Works"/> }     />
        <Route path=path!("/about")     view=|| view! { <Section title="About"/> }     />
        <Route path=path!("/synth")     view=|| view! { <Section title="Synth"/> }     />
        <Route path=path!("/dad-jokes") view=|| view! { <Section title="Dad Jokes"/> } />
      </Routes>
    }
}

/// Publishes a route-completed event whenever the URL changes, query and hash
/// included. Re-navigating to the exact current URL leaves the location
/// untouched; links report that case themselves (see `SiteLink`).
/// Must sit inside `<Router>`.
#[component]
pub fn RouteChangeBridge() -> impl IntoView {
    let Some(events) = use_context::<RouteEvents>() else {
        return;
    };
    let location = use_location();

    Effect::new(move |prev: Option<RouteKey>| {
        let now = RouteKey::new(
            location.pathname.get(),
            location.search.get(),
            location.hash.get(),
        );
        if navigation_completed(prev.as_ref(), &now) {
            events.emit_complete(&now.path);
        }
        now
    });
}
