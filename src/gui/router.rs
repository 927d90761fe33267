// src/gui/router.rs
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::standings::PAGE,
    &pages::team_dash::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
