use leptos::prelude::*;

/// Stand-in for site sections whose content lives elsewhere for now.
#[component]
pub fn Section(title: &'static str) -> impl IntoView {
    view! {
      <section class="flex flex-col gap-y-6">
        <h1 class="text-3xl font-bold">{title}</h1>
        <p class="text-lg">"Nothing here yet. Check back soon."</p>
      </section>
    }
}
