//! Site navigation bar

use leptos::*;

use super::icons::{Icon, IconGlyph};
use super::menu::MenuToggle;

/// One entry of the navigation link list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Docs",
        href: "/docs",
    },
    NavLink {
        label: "Guides",
        href: "/docs/guides",
    },
    NavLink {
        label: "Reference",
        href: "/docs/reference",
    },
];

/// Element id of the mobile panel, referenced by the toggle's `aria-controls`.
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Site header. Every mount starts with the mobile menu closed.
#[component]
pub fn NavBar() -> impl IntoView {
    let menu = MenuToggle::new();

    view! { <NavBarView menu=menu/> }
}

/// Site header driven by an externally owned menu handle.
#[component]
pub fn NavBarView(menu: MenuToggle) -> impl IntoView {
    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center text-gray-900">
                            <IconGlyph icon=Icon::Logo class="h-6 w-6 mr-2 text-indigo-600"/>
                            <span class="text-xl font-bold">"Field Notes"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="desktop-nav hidden md:flex items-center space-x-8">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.href class="nav-link text-gray-600 hover:text-gray-900 transition">
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                        <SearchBox/>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            type="button"
                            class="menu-toggle p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            aria-controls=MOBILE_MENU_ID
                            aria-expanded=move || menu.is_open().to_string()
                            aria-label=move || menu.state().button_label()
                            on:click=move |_| menu.toggle()
                        >
                            <Show
                                when=move || menu.is_open()
                                fallback=|| view! { <IconGlyph icon=Icon::Menu/> }
                            >
                                <IconGlyph icon=Icon::Close/>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || menu.is_open()>
                <div id=MOBILE_MENU_ID class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! {
                                <a href=link.href class="mobile-nav-link block text-gray-600 hover:text-gray-900">
                                    {link.label}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Decorative search field. Uncontrolled: no value binding, no handlers.
#[component]
pub fn SearchBox() -> impl IntoView {
    view! {
        <div class="search-box relative">
            <span class="absolute inset-y-0 left-0 flex items-center pl-3 text-gray-400">
                <IconGlyph icon=Icon::Search class="h-4 w-4"/>
            </span>
            <input
                type="search"
                class="w-56 pl-9 pr-3 py-1.5 text-sm rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                placeholder="Search docs..."
                aria-label="Search documentation"
            />
        </div>
    }
}
