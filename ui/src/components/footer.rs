use leptos::prelude::*;

use crate::components::site_link::{LinkStyle, SiteLink};
use crate::links::{FOOTER_GROUPS, LinkSpec};

const TAGLINE: &str = "Building software on the web since 2019";

#[component]
pub fn Footer() -> impl IntoView {
    let [pages, projects, social] = FOOTER_GROUPS;

    view! {
        <footer class="flex flex-col items-center justify-center gap-y-10 bg-zinc-200 py-10 dark:bg-zinc-800">
            <div class="container flex w-full max-w-2xl items-center justify-between gap-4 max-[375px]:flex-col">
                <FooterLinksGroup links=pages />
                <FooterLinksGroup links=projects />
                <FooterLinksGroup links=social>
                    // keeps the short social column aligned with the others
                    <div class="invisible max-[374px]:hidden" aria-hidden="true">"Home"</div>
                </FooterLinksGroup>
            </div>

            <div class="group flex flex-col justify-center gap-y-2">
                <button title=TAGLINE>"❤️‍🔥"</button>
                <p class="rounded-full border border-orange-500 px-4 py-2 text-center opacity-0 transition duration-700 group-hover:opacity-100 group-hover:ease-in-out dark:border-yellow-500">
                    {TAGLINE}
                </p>
            </div>
        </footer>
    }
}

#[component]
pub fn FooterLinksGroup(
    links: &'static [LinkSpec],
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-start gap-y-4">
            {links
                .iter()
                .map(|link| view! { <SiteLink link=*link style=LinkStyle::Footer /> })
                .collect_view()}
            {children.map(|c| c())}
        </div>
    }
}
