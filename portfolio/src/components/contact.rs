use leptos::prelude::*;
use tracing::warn;

use super::SectionHeading;
use super::icons::{Icon, link_icon};
use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::content::{CONTACT_CHANNELS, PROFILE};
use crate::host::BrowserHost;
use crate::navigation::Section;

const FIELD_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-600 focus:border-transparent outline-none transition-all";

#[component]
pub fn ContactSection() -> impl IntoView {
    let acknowledgement = use_context::<SiteConfig>()
        .unwrap_or_default()
        .acknowledgement;
    let form = RwSignal::new(ContactForm::default());

    let send = move |_| match BrowserHost::new() {
        Ok(host) => form.with(|form| form.submit(&host, &acknowledgement)),
        Err(err) => warn!("contact form submitted without a window: {err}"),
    };

    view! {
        <section id=Section::Contact.id() class="py-20 bg-gray-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Get In Touch" />
                <div class="bg-white rounded-2xl shadow-lg p-8 md:p-12">
                    <div class="grid md:grid-cols-2 gap-12">
                        <div>
                            <h3 class="text-2xl font-bold text-gray-800 mb-6">"Let's Work Together"</h3>
                            <p class="text-gray-600 mb-8">{PROFILE.contact_pitch}</p>
                            <div class="space-y-4">
                                {CONTACT_CHANNELS
                                    .iter()
                                    .map(|channel| {
                                        view! {
                                            <div class="flex items-center">
                                                <span class="text-blue-600 mr-3">
                                                    <Icon path=link_icon(channel.kind) size="20" />
                                                </span>
                                                <span class="text-gray-700">{channel.text}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="space-y-6">
                            <input
                                type="text"
                                placeholder="Your Name"
                                class=FIELD_CLASS
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            <input
                                type="email"
                                placeholder="Your Email"
                                class=FIELD_CLASS
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                            <textarea
                                placeholder="Your Message"
                                rows="4"
                                class=format!("{FIELD_CLASS} resize-none")
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                            ></textarea>
                            <button
                                class="w-full bg-gradient-to-r from-blue-600 to-purple-600 text-white py-3 rounded-lg font-medium hover:shadow-lg transition-all duration-200 transform hover:-translate-y-1"
                                on:click=send
                            >
                                "Send Message"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
