//! Static link tables and the read-only link palette shared by the header
//! menu and the footer.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Client-side route, handled by the router.
    Page,
    /// Opens in a new tab.
    External,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkSpec {
    pub label: &'static str,
    pub href: &'static str,
    pub target: LinkTarget,
}

impl LinkSpec {
    pub const fn page(label: &'static str, href: &'static str) -> Self {
        Self { label, href, target: LinkTarget::Page }
    }

    pub const fn external(label: &'static str, href: &'static str) -> Self {
        Self { label, href, target: LinkTarget::External }
    }

    pub fn is_external(&self) -> bool {
        self.target == LinkTarget::External
    }
}

const GITHUB: LinkSpec = LinkSpec::external("GitHub", "https://github.com/evan-walter");
const LINKEDIN: LinkSpec = LinkSpec::external("LinkedIn", "https://linkedin.com/in/-evanwalter");
const RESUME: LinkSpec = LinkSpec::external("Resume", "/resume.pdf");

pub const NAV_PAGES: &[LinkSpec] = &[
    LinkSpec::page("Home", "/"),
    LinkSpec::page("Projects", "/projects"),
    RESUME,
];

pub const NAV_SOCIAL: &[LinkSpec] = &[GITHUB, LINKEDIN];

pub const FOOTER_GROUPS: [&[LinkSpec]; 3] = [
    &[
        LinkSpec::page("Home", "/"),
        LinkSpec::page("Podcast", "/podcast"),
        LinkSpec::page("Works", "/works"),
        LinkSpec::page("About", "/about"),
    ],
    &[
        LinkSpec::external("Lens Social App", "https://lens-starter-app.vercel.app/"),
        LinkSpec::page("Synth", "/synth"),
        LinkSpec::page("Dad Jokes", "/dad-jokes"),
        RESUME,
    ],
    &[
        GITHUB,
        LINKEDIN,
        LinkSpec::external("Twitter", "https://twitter.com/_evanwalter_"),
    ],
];

/// Exact path match, the same rule the router uses for the current page.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// Whether following `link` from `current_path` must be reported by the link
/// itself. External links open a new tab, and a tap on the current page
/// leaves the URL unchanged, so the router sees neither.
pub fn reports_follow(link: &LinkSpec, current_path: &str) -> bool {
    link.is_external() || is_active(current_path, link.href)
}

/// Link colour classes, provided once by `App` as context and never mutated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkPalette {
    pub nav_active: &'static str,
    pub nav_idle: &'static str,
    pub footer: &'static str,
    pub text: &'static str,
}

impl Default for LinkPalette {
    fn default() -> Self {
        Self {
            nav_active: "text-white",
            nav_idle: "text-zinc-400 hover:text-white",
            footer: "text-zinc-600 hover:text-black dark:text-zinc-400 dark:hover:text-white",
            text: "text-orange-600 hover:underline dark:text-yellow-500",
        }
    }
}

impl LinkPalette {
    pub fn nav_class(&self, active: bool) -> String {
        let colour = if active { self.nav_active } else { self.nav_idle };
        format!("{colour} w-20 max-sm:my-2 sm:w-fit")
    }
}
