use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! { <p class="text-center">"404 – not found"</p> }
}
