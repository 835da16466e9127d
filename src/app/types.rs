//! Screen and input-mode types.

/// Which page is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Offers,
    Amenities,
    Villas,
    VillaDetail,
    Booking,
    Contact,
}

impl Screen {
    /// Pages reachable from the top navigation bar, in tab order.
    pub const TABS: [Screen; 4] = [
        Screen::Offers,
        Screen::Amenities,
        Screen::Villas,
        Screen::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Offers => "Offers",
            Screen::Amenities => "Amenities",
            Screen::Villas => "Villas",
            Screen::VillaDetail => "Villa",
            Screen::Booking => "Book",
            Screen::Contact => "Contact",
        }
    }

    /// Tab highlighted in the navigation bar for this page.
    pub fn tab(&self) -> Screen {
        match self {
            Screen::VillaDetail | Screen::Booking => Screen::Villas,
            other => *other,
        }
    }

    pub fn is_listing(&self) -> bool {
        matches!(self, Screen::Offers | Screen::Amenities | Screen::Villas)
    }

    pub fn next_tab(&self) -> Screen {
        let index = Self::TABS
            .iter()
            .position(|tab| *tab == self.tab())
            .unwrap_or(0);
        Self::TABS[(index + 1) % Self::TABS.len()]
    }
}

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Editing the search bar of the current listing.
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line message at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Fetch state of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}
