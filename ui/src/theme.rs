use std::fmt;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use wasm_bindgen::JsValue;

const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

const SUN_PATH: &str = "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z";
const MOON_PATH: &str = "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// SVG path for the toggle: offer the sun while dark, the moon while light.
    pub fn icon_path(self) -> &'static str {
        match self {
            Theme::Dark => SUN_PATH,
            Theme::Light => MOON_PATH,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(anyhow!("unknown theme {other:?}")),
        }
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{e:?}")
}

fn stored_theme() -> Option<Theme> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()?
        .parse()
        .ok()
}

fn system_theme() -> Option<Theme> {
    let prefers_dark = web_sys::window()?.match_media(DARK_QUERY).ok().flatten()?.matches();
    Some(if prefers_dark { Theme::Dark } else { Theme::Light })
}

/// Stored preference first, then the OS setting, then light.
pub fn resolved_theme() -> Theme {
    stored_theme().or_else(system_theme).unwrap_or_default()
}

/// Puts `class="dark"` on `<html>` when dark, removes it otherwise.
pub fn apply_theme(theme: Theme) -> anyhow::Result<()> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .context("no document element")?;

    root.class_list()
        .toggle_with_force("dark", theme == Theme::Dark)
        .map_err(js_err)
        .context("toggle dark class")?;

    Ok(())
}

pub fn save_theme(theme: Theme) -> anyhow::Result<()> {
    let storage = web_sys::window()
        .context("no window")?
        .local_storage()
        .map_err(js_err)?
        .context("localStorage unavailable")?;

    storage
        .set_item(STORAGE_KEY, theme.as_str())
        .map_err(js_err)
        .context("persist theme")
}
