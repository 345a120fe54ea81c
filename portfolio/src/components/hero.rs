use leptos::prelude::*;

use super::icons::{ICON_CARET_DOWN, Icon};
use super::navigate_to;
use crate::content::PROFILE;
use crate::navigation::{NavigationState, Section};

#[component]
pub fn Hero(nav: RwSignal<NavigationState>) -> impl IntoView {
    view! {
        <section
            id=Section::Home.id()
            class="pt-16 min-h-screen flex items-center justify-center relative overflow-hidden bg-white"
        >
            <div class="relative z-10 text-center max-w-4xl mx-auto px-4">
                <div class="mb-8">
                    <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-r from-blue-500 to-purple-600 p-1">
                        <div class="w-full h-full rounded-full bg-white flex items-center justify-center">
                            <span class="text-4xl font-bold text-gray-800">{PROFILE.initials}</span>
                        </div>
                    </div>
                </div>
                <h1 class="text-5xl md:text-7xl font-bold text-gray-800 mb-4">
                    <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        {PROFILE.name}
                    </span>
                </h1>
                <p class="text-xl md:text-2xl text-gray-600 mb-8">{PROFILE.headline}</p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="bg-gradient-to-r from-blue-600 to-purple-600 text-white px-8 py-3 rounded-full font-medium hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1"
                        on:click=move |_| navigate_to(nav, Section::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        class="border border-gray-300 text-gray-700 px-8 py-3 rounded-full font-medium hover:bg-gray-50 transition-all duration-200"
                        on:click=move |_| navigate_to(nav, Section::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="mt-16 animate-bounce text-gray-400 flex justify-center">
                    <Icon path=ICON_CARET_DOWN size="32" />
                </div>
            </div>
        </section>
    }
}
