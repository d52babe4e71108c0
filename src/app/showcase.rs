use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::content::{anchors, Project, Service, Skill};

#[component]
pub fn Skills(skills: &'static [Skill]) -> impl IntoView {
    view! {
        <section id=anchors::SKILLS class="min-h-screen bg-white px-6 md:px-20 py-24 text-blue-900">
            <h2 class="text-4xl font-bold mb-12 border-b-4 border-cyan-400 inline-block">
                "My Skills"
            </h2>
            <p class="mb-12 max-w-3xl">
                "These are some of the key skills and tools I use in my projects, combining technology and creativity."
            </p>
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-8">
                {skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <div
                                class="flex flex-col items-center space-y-3 p-6 rounded-lg shadow-lg bg-blue-50 hover:bg-cyan-50 transition-colors duration-300 ease-in-out cursor-pointer"
                                title=skill.name.as_str()
                            >
                                <img
                                    src=skill.image.as_str()
                                    alt=skill.name.as_str()
                                    class="w-20 h-20 object-contain"
                                    loading="lazy"
                                />
                                <span class="text-lg font-semibold">{skill.name.as_str()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Services(services: &'static [Service]) -> impl IntoView {
    view! {
        <section id=anchors::SERVICES class="min-h-screen bg-white px-6 md:px-20 py-24 text-blue-900">
            <h2 class="text-4xl font-bold mb-12 border-b-4 border-cyan-400 inline-block">
                "Services"
            </h2>
            <div class="grid gap-12 md:grid-cols-3">
                {services.iter().map(|service| view! { <ServiceCard service /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: &'static Service) -> impl IntoView {
    view! {
        <div class="p-8 rounded-xl shadow-lg bg-blue-50 hover:bg-cyan-50 transition-colors duration-300 ease-in-out">
            <div
                class="w-16 h-16 bg-cyan-200 rounded-full flex justify-center items-center mb-6 text-3xl"
                aria-hidden="true"
            >
                {service.icon.as_str()}
            </div>
            <h3 class="font-semibold text-xl mb-3">{service.title.as_str()}</h3>
            <p class="mb-4">{service.description.as_str()}</p>
            <ul class="list-disc list-inside space-y-2 text-blue-800">
                {service.points.iter().map(|point| view! { <li>{point.as_str()}</li> }).collect_view()}
            </ul>
        </div>
    }
}

/// Hidden until it first scrolls into view, then stays visible.
#[component]
pub fn FadeIn(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !revealed.get_untracked() {
            set_revealed.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if revealed.get() {
                    "transition-all duration-700 opacity-100 translate-y-0"
                } else {
                    "transition-all duration-700 opacity-0 translate-y-10"
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
pub fn Gallery(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=anchors::PORTFOLIO class="min-h-screen bg-blue-50 text-blue-900 px-6 md:px-20 py-24">
            <h2 class="text-4xl font-bold mb-12 border-b-4 border-cyan-400 inline-block">
                "Portfolio"
            </h2>
            <p class="mb-8 max-w-3xl">
                "Some recent projects showcasing my skills in full-stack web development and design."
            </p>
            <div class="grid gap-8 md:grid-cols-3">
                {projects
                    .iter()
                    .map(|project| {
                        view! {
                            <FadeIn>
                                <div
                                    class="rounded-lg overflow-hidden shadow-lg bg-white cursor-pointer transform hover:scale-105 transition-transform duration-300"
                                    role="img"
                                    aria-label=project.title.as_str()
                                >
                                    <img
                                        src=project.image.as_str()
                                        alt=project.title.as_str()
                                        class="w-full object-cover"
                                    />
                                    <div class="p-4">
                                        <h3 class="font-semibold text-xl mb-1">
                                            {project.title.as_str()}
                                        </h3>
                                        <p class="text-sm text-gray-600">
                                            {project.description.as_str()}
                                        </p>
                                    </div>
                                </div>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
