use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::links::{LinkPalette, LinkSpec, LinkTarget, is_active, reports_follow};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum LinkStyle {
    /// Highlights the link matching the current path.
    #[default]
    Nav,
    Footer,
}

/// Renders one link: router `<A>` for pages, a new-tab `<a>` for everything
/// else. `on_follow` fires for clicks the router won't report as a URL
/// change: external links, and page links pointing at the current page.
#[component]
pub fn SiteLink(
    link: LinkSpec,
    #[prop(optional)] style: LinkStyle,
    #[prop(optional)] on_follow: Option<Callback<()>>,
) -> impl IntoView {
    let palette = use_context::<LinkPalette>().unwrap_or_default();
    let location = use_location();

    let pathname = location.pathname;

    let class = move || match style {
        LinkStyle::Nav => palette.nav_class(is_active(&pathname.get(), link.href)),
        LinkStyle::Footer => palette.footer.to_string(),
    };

    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(cb) = on_follow.as_ref() {
            if reports_follow(&link, &pathname.get_untracked()) {
                cb.run(());
            }
        }
    };

    match link.target {
        LinkTarget::Page => view! {
            <A href=link.href attr:class=class on:click=on_click>
                {link.label}
            </A>
        }
        .into_any(),

        LinkTarget::External => view! {
            <a
                href=link.href
                class=class
                target="_blank"
                rel="noreferrer noopener"
                on:click=on_click
            >
                {link.label}
            </a>
        }
        .into_any(),
    }
}
