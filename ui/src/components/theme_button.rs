use leptos::leptos_dom::logging::console_warn;
use leptos::prelude::*;

use crate::theme::{Theme, apply_theme, resolved_theme, save_theme};

/// Light/dark switch. Renders nothing until mounted so the icon never shows
/// the wrong theme before the stored preference has been read.
#[component]
pub fn ThemeButton() -> impl IntoView {
    let (mounted, set_mounted) = signal(false);
    let (theme, set_theme) = signal(Theme::default());

    Effect::new(move |_| {
        set_theme.set(resolved_theme());
        set_mounted.set(true);
    });

    let toggle = move |_| {
        let next = theme.get_untracked().toggled();

        if let Err(e) = apply_theme(next) {
            console_warn(&format!("theme: could not apply {next}: {e:#}"));
        }
        if let Err(e) = save_theme(next) {
            console_warn(&format!("theme: could not persist {next}: {e:#}"));
        }
        set_theme.set(next);
    };

    view! {
        <Show when=move || mounted.get()>
            <button
                class="text-zinc-500 hover:text-black dark:text-zinc-400 dark:hover:text-white"
                title=move || format!("Switch to {} theme", theme.get().toggled())
                on:click=toggle
            >
                <svg
                    class="mx-auto h-6 w-6"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d=move || theme.get().icon_path()
                    />
                </svg>
            </button>
        </Show>
    }
}
