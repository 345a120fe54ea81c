//! # portfolio
//!
//! Single-page personal portfolio rendered client-side with Leptos 0.8.
//!
//! The page is a stack of static sections (hero, about, skills, projects,
//! contact). The interactive shell is small:
//!
//! - a menu toggle for small screens,
//! - a scroll listener that highlights the nav link of the section in view,
//! - smooth-scroll navigation from nav links and hero buttons,
//! - a one-shot fallback for project images that fail to load,
//! - a contact form that only acknowledges.
//!
//! The behavior lives in host-independent modules ([`navigation`],
//! [`image`], [`contact`]) that reach the DOM only through the
//! [`host::DocumentHost`] and [`host::Notifier`] traits, so it is tested
//! natively. [`components`] wires it to the browser.

pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod host;
pub mod image;
pub mod logging;
pub mod navigation;

use leptos::ev;
use leptos::prelude::*;
use tracing::{info, warn};

use components::{About, ContactSection, Footer, Hero, Nav, Projects, Skills};
use config::SiteConfig;
use host::BrowserHost;
use navigation::NavigationState;

pub use error::{PortfolioError, Result};

/// Browser entry point: panic hook, config, logging, then mount.
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = BrowserHost::new().and_then(|host| SiteConfig::load(host.document()));
    let config = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(err) = logging::init(&config.log_level) {
        web_sys::console::warn_1(&format!("portfolio: logging disabled: {err}").into());
    }
    if let Err(err) = loaded {
        warn!("using default site config: {err}");
    }

    info!(lookahead = config.scroll_lookahead_px, "mounting portfolio");
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let nav = RwSignal::new(NavigationState::default());
    let lookahead = config.scroll_lookahead_px;
    provide_context(config);

    let listener = window_event_listener(ev::scroll, move |_| match BrowserHost::new() {
        Ok(host) => nav.maybe_update(|state| state.highlight(&host, lookahead)),
        Err(err) => warn!("scroll event without a document: {err}"),
    });
    on_cleanup(move || listener.remove());

    view! {
        <div class="min-h-screen bg-white">
            <Nav nav=nav />
            <main>
                <Hero nav=nav />
                <About />
                <Skills />
                <Projects />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
