use super::viewport::Viewport;

/// Open/closed flag of the collapsible navigation menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Menu icon clicked.
    Toggle,
    /// A client-side navigation finished.
    RouteChanged,
    /// An external link (new tab) was clicked from inside the menu.
    LinkFollowed,
    /// The viewport crossed the breakpoint.
    ViewportChanged(Viewport),
}

impl MenuState {
    pub const OPEN: Self = Self { is_open: true };
    pub const CLOSED: Self = Self { is_open: false };

    /// Wide screens start open, narrow ones collapsed.
    pub fn initial(viewport: Viewport) -> Self {
        Self {
            is_open: viewport.is_wide(),
        }
    }

    pub fn is_open(self) -> bool {
        self.is_open
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        match event {
            MenuEvent::Toggle => Self {
                is_open: !self.is_open,
            },
            MenuEvent::RouteChanged | MenuEvent::LinkFollowed => Self::CLOSED,
            MenuEvent::ViewportChanged(Viewport::Wide) => Self::OPEN,
            // narrowing leaves the menu as it was
            MenuEvent::ViewportChanged(Viewport::Narrow) => self,
        }
    }

    /// Whether the link groups are rendered at all. Wide screens always show
    /// them, even after a navigation collapsed the state.
    pub fn links_visible(self, viewport: Viewport) -> bool {
        self.is_open || viewport.is_wide()
    }
}
