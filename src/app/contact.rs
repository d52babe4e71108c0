use leptos::{ev::SubmitEvent, prelude::*};

use crate::content::{anchors, build_year};

const THANKS: &str = "Thanks for reaching out!";

#[component]
pub fn Contact() -> impl IntoView {
    // nothing is sent anywhere, the visitor just gets acknowledged
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted");
        if let Err(e) = window().alert_with_message(THANKS) {
            log::warn!("couldn't show contact acknowledgement: {e:?}");
        }
    };

    view! {
        <section id=anchors::CONTACT class="min-h-screen bg-white px-6 md:px-20 py-24 text-blue-900">
            <h2 class="text-4xl font-bold mb-12 border-b-4 border-cyan-400 inline-block">
                "Contact"
            </h2>
            <p class="mb-8 max-w-3xl">
                "I am currently open to new opportunities and freelance projects. Feel free to get in touch!"
            </p>
            <form class="max-w-xl space-y-6" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Your Name"
                    required=true
                    class="w-full px-4 py-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-cyan-400"
                />
                <input
                    type="email"
                    placeholder="Your Email"
                    required=true
                    class="w-full px-4 py-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-cyan-400"
                />
                <textarea
                    placeholder="Your Message"
                    required=true
                    rows="5"
                    class="w-full px-4 py-3 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-cyan-400"
                ></textarea>
                <button
                    type="submit"
                    class="bg-cyan-500 text-white px-8 py-3 rounded font-semibold hover:bg-cyan-600 transition-colors"
                >
                    "Send Message"
                </button>
            </form>
        </section>
    }
}

#[component]
pub fn Footer(owner: String) -> impl IntoView {
    let notice = match build_year() {
        Some(year) => format!("© {year} {owner}"),
        None => format!("© {owner}"),
    };
    view! {
        <footer class="bg-blue-950 text-blue-200 text-center text-sm py-6">
            {notice}
        </footer>
    }
}
