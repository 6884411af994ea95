use leptos::prelude::*;

use crate::links::LinkPalette;

#[component]
pub fn Home() -> impl IntoView {
    let palette = use_context::<LinkPalette>().unwrap_or_default();

    view! {
      <section class="flex flex-col gap-y-6">
        <h1 class="text-4xl font-bold">"Hi, I'm Evan."</h1>
        <p class="text-lg">
          "I build things for the web. Some of them are listed on the "
          <a href="/projects" class=palette.text>"projects"</a>
          " page, the rest live on GitHub."
        </p>
      </section>
    }
}
