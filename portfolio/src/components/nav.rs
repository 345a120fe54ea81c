use leptos::prelude::*;

use super::icons::{ICON_CLOSE, ICON_MENU, Icon};
use super::navigate_to;
use crate::navigation::{NavigationState, Section};

const LINK_CLASS: &str = "text-sm font-medium transition-all duration-200 hover:text-blue-600";

#[component]
pub fn Nav(nav: RwSignal<NavigationState>) -> impl IntoView {
    let menu_open = move || nav.with(|state| state.menu_open);

    view! {
        <nav class="fixed top-0 left-0 right-0 bg-white/90 backdrop-blur-md shadow-sm z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        "Portfolio"
                    </div>

                    // Desktop links
                    <div class="hidden md:flex space-x-8">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                let class = move || {
                                    if nav.with(|state| state.active == section) {
                                        format!("{LINK_CLASS} text-blue-600 border-b-2 border-blue-600")
                                    } else {
                                        format!("{LINK_CLASS} text-gray-700")
                                    }
                                };
                                view! {
                                    <button class=class on:click=move |_| navigate_to(nav, section)>
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <button
                        class="md:hidden text-gray-700 hover:text-blue-600"
                        aria-label="Toggle menu"
                        on:click=move |_| nav.update(NavigationState::toggle_menu)
                    >
                        {move || {
                            if menu_open() {
                                view! { <Icon path=ICON_CLOSE /> }
                            } else {
                                view! { <Icon path=ICON_MENU /> }
                            }
                        }}
                    </button>
                </div>
            </div>

            // Mobile drawer
            <Show when=menu_open>
                <div class="md:hidden bg-white border-t">
                    <div class="px-2 pt-2 pb-3 space-y-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="block w-full text-left px-3 py-2 text-base font-medium text-gray-700 hover:text-blue-600"
                                        on:click=move |_| navigate_to(nav, section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
