use leptos::prelude::*;

use crate::components::site_link::{LinkStyle, SiteLink};
use crate::links::FOOTER_GROUPS;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
      <section class="flex flex-col gap-y-6">
        <h1 class="text-3xl font-bold">"Projects"</h1>
        <ul class="flex flex-col gap-y-3">
          {FOOTER_GROUPS[1]
              .iter()
              .map(|link| view! { <li><SiteLink link=*link style=LinkStyle::Footer /></li> })
              .collect_view()}
        </ul>
      </section>
    }
}
