use leptos::{either::Either, prelude::*};

use crate::content::{anchors, Fact, Profile};

#[component]
pub fn About(profile: &'static Profile) -> impl IntoView {
    view! {
        <section
            id=anchors::ABOUT
            class="min-h-screen flex flex-col justify-center bg-blue-50 text-blue-900 px-6 md:px-20 py-28"
        >
            <h2 class="text-5xl font-extrabold mb-12 border-b-4 border-cyan-400 inline-block tracking-wide">
                "About Me"
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-14 items-center max-w-6xl mx-auto">
                <div class="rounded-full overflow-hidden shadow-2xl border border-cyan-300">
                    <img
                        src=profile.image.as_str()
                        alt=format!("{} Profile", profile.name)
                        class="rounded-lg w-full object-cover transition-transform duration-500 hover:scale-105"
                    />
                </div>
                <div class="md:col-span-2 space-y-7 text-lg leading-relaxed">
                    {profile.bio.iter().map(|p| view! { <p>{p.as_str()}</p> }).collect_view()}
                    <ul class="grid grid-cols-1 sm:grid-cols-2 gap-5 text-blue-800 font-medium">
                        {profile.facts.iter().map(|fact| view! { <FactItem fact /> }).collect_view()}
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FactItem(fact: &'static Fact) -> impl IntoView {
    let text = fact.text.as_str();
    view! {
        <li class="flex items-center space-x-3">
            <span class="text-cyan-500 shrink-0" aria-hidden="true">
                {fact.icon.as_str()}
            </span>
            {match fact.href.as_deref() {
                Some(href) => {
                    Either::Left(
                        view! {
                            <a href=href class="text-cyan-600 underline hover:text-cyan-700">
                                {text}
                            </a>
                        },
                    )
                }
                None => Either::Right(view! { <span>{text}</span> }),
            }}
        </li>
    }
}
