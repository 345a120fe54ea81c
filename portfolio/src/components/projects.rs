use leptos::prelude::*;
use tracing::debug;

use super::SectionHeading;
use super::icons::{ICON_EXTERNAL_LINK, ICON_GITHUB, Icon};
use crate::config::SiteConfig;
use crate::content::{PROJECTS, Project};
use crate::image::ImageSource;
use crate::navigation::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 bg-white">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Featured Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One project: image linking to the live demo, hover links, tech chips.
///
/// A broken image swaps to the configured fallback once.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let fallback = use_context::<SiteConfig>()
        .unwrap_or_default()
        .fallback_image_url;
    let image = RwSignal::new(ImageSource::new(project.image));

    let on_error = move |_| {
        image.maybe_update(|image| {
            let swapped = image.fail(&fallback);
            if swapped {
                debug!(project = project.title, "project image failed, using fallback");
            }
            swapped
        });
    };

    view! {
        <div class="bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-2xl transition-all duration-300 transform">
            <div class="relative">
                <a href=project.live target="_blank" rel="noopener noreferrer" class="block cursor-pointer">
                    <img
                        src=move || image.with(|image| image.src().to_owned())
                        alt=project.title
                        class="w-full h-48 object-cover object-center transition-transform duration-300 hover:scale-105"
                        on:error=on_error
                    />
                </a>
                <div class="absolute inset-0 pointer-events-none bg-black bg-opacity-0 hover:bg-opacity-50 transition-all duration-300 flex items-center justify-center">
                    <div class="opacity-0 hover:opacity-100 pointer-events-auto transition-opacity duration-300 flex space-x-4">
                        <a
                            href=project.github
                            class="text-white hover:text-blue-400 transition-colors"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon path=ICON_GITHUB />
                        </a>
                        <a
                            href=project.live
                            class="text-white hover:text-blue-400 transition-colors"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <Icon path=ICON_EXTERNAL_LINK />
                        </a>
                    </div>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-800 mb-2">{project.title}</h3>
                <p class="text-gray-600 mb-4">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-blue-100 text-blue-700 rounded-full text-sm">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
