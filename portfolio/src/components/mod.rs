// Page sections
// Developed by Fatimah Adam (c)2025

mod about;
mod contact;
mod footer;
mod hero;
pub mod icons;
mod nav;
mod projects;
mod skills;

pub use about::About;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use projects::{ProjectCard, Projects};
pub use skills::Skills;

use leptos::prelude::*;
use tracing::warn;

use crate::host::BrowserHost;
use crate::navigation::{NavigationState, Section};

/// Click handler body shared by nav links and hero buttons.
pub(crate) fn navigate_to(nav: RwSignal<NavigationState>, section: Section) {
    match BrowserHost::new() {
        Ok(host) => nav.update(|state| {
            state.navigate(&host, section);
        }),
        Err(err) => {
            warn!(%section, "navigation without a document: {err}");
            nav.update(|state| state.menu_open = false);
        }
    }
}

/// Centered section heading with the gradient underline.
#[component]
pub(crate) fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl font-bold text-gray-800 mb-4">{title}</h2>
            <div class="w-20 h-1 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto"></div>
        </div>
    }
}
