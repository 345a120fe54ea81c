use leptos::prelude::*;

use super::SectionHeading;
use super::icons::{ICON_STAR, Icon, link_icon};
use crate::content::{PROFILE, SOCIAL_LINKS, STATS, Stat, StatValue};
use crate::navigation::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h3 class="text-2xl font-bold text-gray-800 mb-6">{PROFILE.about_title}</h3>
                        {PROFILE
                            .bio
                            .iter()
                            .map(|paragraph| {
                                view! { <p class="text-gray-600 mb-6 leading-relaxed">{*paragraph}</p> }
                            })
                            .collect_view()}
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    let target = link.external.then_some("_blank");
                                    let rel = link.external.then_some("noopener noreferrer");
                                    view! {
                                        <a
                                            href=link.href
                                            target=target
                                            rel=rel
                                            class="text-gray-600 hover:text-blue-600 transition-colors"
                                        >
                                            <Icon path=link_icon(link.kind) />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="relative">
                        <div class="bg-gradient-to-r from-blue-600 to-purple-600 rounded-lg p-8 text-white">
                            <div class="grid grid-cols-2 gap-6">
                                {STATS.iter().map(|stat| view! { <StatTile stat=*stat /> }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatTile(stat: Stat) -> impl IntoView {
    let value = match stat.value {
        StatValue::Figure(figure) => {
            view! { <div class="text-3xl font-bold mb-2">{figure}</div> }.into_any()
        }
        StatValue::Stars(count) => view! {
            <div class="flex justify-center mb-2">
                {(0..count).map(|_| view! { <Icon path=ICON_STAR size="16" /> }).collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="text-center">
            {value}
            <div class="text-sm opacity-90">{stat.label}</div>
        </div>
    }
}
