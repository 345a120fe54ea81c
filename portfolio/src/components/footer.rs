use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!(
        "© {} {}. All rights reserved.",
        PROFILE.copyright_year, PROFILE.name
    );
    view! {
        <footer class="bg-gray-800 text-white py-8">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <p class="text-gray-400">{copyright}</p>
            </div>
        </footer>
    }
}
