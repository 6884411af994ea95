use leptos::leptos_dom::logging::console_log;
use leptos::prelude::*;

use crate::components::site_link::SiteLink;
use crate::links::{LinkSpec, NAV_PAGES, NAV_SOCIAL};
use crate::menu::viewport::{crossing, current_viewport, use_viewport};
use crate::menu::{MenuController, MenuState, RouteEvents, Viewport};

const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";
const OPEN_ICON: &str = "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5";

/// Collapsible site navigation.
///
/// Narrow screens get a menu icon and the link groups only exist in the DOM
/// while the menu is open. Wide screens always show the links.
#[component]
pub fn NavMenu() -> impl IntoView {
    let routes = use_context::<RouteEvents>().unwrap_or_default();
    let menu = RwSignal::new(MenuState::default());
    let controller = MenuController::mount(menu, current_viewport(), &routes);

    on_cleanup({
        let c = controller.clone();
        move || {
            if c.unmount() {
                console_log("nav menu: route listener released");
            }
        }
    });

    let viewport = use_viewport();

    // only crossings matter; the first run just records where we started
    Effect::new({
        let c = controller.clone();
        move |prev: Option<Viewport>| {
            let now = viewport.get();
            if let Some(crossed) = crossing(prev, now) {
                c.viewport_changed(crossed);
            }
            now
        }
    });

    let links_visible = move || menu.get().links_visible(viewport.get());

    let toggle = {
        let c = controller.clone();
        move |_| c.toggle()
    };

    let group = move |links: &'static [LinkSpec]| {
        let c = controller.clone();
        let on_follow = Callback::new(move |_: ()| c.link_followed());
        view! {
            <NavGroup>
                {links
                    .iter()
                    .map(|link| view! { <SiteLink link=*link on_follow /> })
                    .collect_view()}
            </NavGroup>
        }
    };

    view! {
        <nav class="absolute flex flex-col items-start justify-between gap-y-3 gap-x-8 rounded-lg bg-zinc-900 pt-8 pb-4 max-sm:w-full sm:top-0 sm:left-0 sm:right-0 sm:w-full sm:flex-row sm:items-center sm:px-4 sm:pb-8">
            <button
                class="block h-6 w-6 sm:hidden"
                aria-label=move || if menu.get().is_open() { "Close menu" } else { "Open menu" }
                aria-expanded=move || menu.get().is_open().to_string()
                on:click=toggle
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke-width="1.5"
                    stroke="currentColor"
                    class="h-6 w-6"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        d=move || if menu.get().is_open() { CLOSE_ICON } else { OPEN_ICON }
                    />
                </svg>
            </button>

            <Show when=links_visible>
                {group(NAV_PAGES)}
                {group(NAV_SOCIAL)}
            </Show>
        </nav>
    }
}

#[component]
fn NavGroup(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center gap-x-8 gap-y-3 sm:flex-row sm:items-center">
            {children()}
        </div>
    }
}
