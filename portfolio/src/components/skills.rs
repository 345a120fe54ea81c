use leptos::prelude::*;

use super::SectionHeading;
use super::icons::{Icon, skill_icon};
use crate::content::{SERVICES, SKILLS};
use crate::navigation::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Skills & Expertise" />
                <div class="grid md:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-2xl font-bold text-gray-800 mb-8">"Technical Skills"</h3>
                        <div class="grid grid-cols-2 gap-4">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="bg-white p-4 rounded-lg shadow-sm text-center">
                                            <div class="flex justify-center mb-2 text-blue-600">
                                                <Icon path=skill_icon(skill.icon) size="32" />
                                            </div>
                                            <h4 class="font-semibold text-gray-800">{skill.name}</h4>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold text-gray-800 mb-8">"What I Do"</h3>
                        <div class="space-y-6">
                            {SERVICES
                                .iter()
                                .map(|service| {
                                    view! {
                                        <div class="bg-white p-6 rounded-lg shadow-sm">
                                            <h4 class="font-bold text-gray-800 mb-2">{service.title}</h4>
                                            <p class="text-gray-600">{service.summary}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
