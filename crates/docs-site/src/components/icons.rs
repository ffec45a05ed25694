//! Inline SVG glyphs used by the navigation bar

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Logo,
    Search,
    Menu,
    Close,
}

impl Icon {
    /// Stable name emitted as the `data-icon` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Logo => "logo",
            Icon::Search => "search",
            Icon::Menu => "menu",
            Icon::Close => "close",
        }
    }

    /// Path data for a 24x24 outline glyph.
    pub fn path(self) -> &'static str {
        match self {
            Icon::Logo => "M12 6.25v13m0-13C10.83 5.48 9.25 5 7.5 5S4.17 5.48 3 6.25v13C4.17 18.48 5.75 18 7.5 18s3.33.48 4.5 1.25m0-13C13.17 5.48 14.75 5 16.5 5c1.75 0 3.33.48 4.5 1.25v13C19.83 18.48 18.25 18 16.5 18c-1.75 0-3.33.48-4.5 1.25",
            Icon::Search => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
            Icon::Menu => "M4 6h16M4 12h16M4 18h16",
            Icon::Close => "M6 18L18 6M6 6l12 12",
        }
    }
}

#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = "h-6 w-6")] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            data-icon=icon.name()
            aria-hidden="true"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon.path()/>
        </svg>
    }
}
