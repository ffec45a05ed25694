//! Site pages

mod docs;
mod home;
mod not_found;

pub use docs::{DocSection, DocsPage};
pub use home::HomePage;
pub use not_found::NotFoundPage;
