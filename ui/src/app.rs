use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::footer::Footer;
use crate::components::nav_menu::NavMenu;
use crate::components::theme_button::ThemeButton;
use crate::links::LinkPalette;
use crate::menu::RouteEvents;
use crate::routes::{RouteChangeBridge, SiteRoutes};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(LinkPalette::default());
    provide_context(RouteEvents::new());

    view! {
      <Title text="Evan Walter"/>
      <Router>
        <RouteChangeBridge/>

        <header class="relative flex justify-end px-4 pt-8 sm:pb-8">
          <NavMenu/>
          <div class="relative z-10 sm:pt-0.5">
            <ThemeButton/>
          </div>
        </header>

        <main class="container mx-auto min-h-screen max-w-2xl px-4 pt-24">
          <SiteRoutes/>
        </main>

        <Footer/>
      </Router>
    }
}
