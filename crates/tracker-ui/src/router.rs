//! Router configuration
//!
//! Two static routes: the task list at `/` and the about page at `/about`.
//! Anything else renders the not-found page.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Routes},
};

use crate::pages::{About, NotFound, Tasks};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const ABOUT: &str = "/about";
}

/// Pages reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tasks,
    About,
}

impl Page {
    pub const ALL: [Self; 2] = [Self::Tasks, Self::About];

    /// Path segment the router matches for this page.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Tasks => "",
            Self::About => "about",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Tasks => routes::HOME,
            Self::About => routes::ABOUT,
        }
    }

    /// The page for an exact path, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// Route table; must be rendered inside a `<Router>`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment(Page::Tasks.segment()) view=Tasks />
            <Route path=StaticSegment(Page::About.segment()) view=About />
        </Routes>
    }
}
