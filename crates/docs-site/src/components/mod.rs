//! Site components

mod icons;
mod menu;
mod nav;

pub use icons::{Icon, IconGlyph};
pub use menu::{MenuState, MenuToggle};
pub use nav::{NavBar, NavBarView, NavLink, SearchBox, MOBILE_MENU_ID, NAV_LINKS};
