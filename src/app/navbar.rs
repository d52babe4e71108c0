use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::sections::{ActiveSectionTracker, DocumentLayout};

/// Reads anchor positions straight from the live DOM.
struct BrowserLayout;

impl DocumentLayout for BrowserLayout {
    fn top_offset_of(&self, id: &str) -> Option<f64> {
        let el = document().get_element_by_id(id)?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(el.offset_top() as f64)
    }

    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }
}

fn scroll_to(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        log::debug!("no anchor for #{id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Navbar(brand: String, tracker: ActiveSectionTracker) -> impl IntoView {
    let sections = tracker.sections().to_vec();
    let (active_id, set_active_id) = signal(tracker.active_id().to_string());
    let tracker = StoredValue::new(tracker);

    let refresh = move || {
        let changed = tracker
            .try_update_value(|t| t.recompute(&BrowserLayout))
            .unwrap_or(false);
        if changed {
            set_active_id.set(tracker.with_value(|t| t.active_id().to_string()));
        }
    };

    // establish the highlight before any scrolling happens
    Effect::new(move |_| refresh());
    let _ = use_event_listener(use_window(), ev::scroll, move |_| refresh());

    view! {
        <nav class="fixed top-0 left-0 w-full bg-blue-900/90 backdrop-blur-sm z-50 shadow-md">
            <div class="max-w-7xl mx-auto flex justify-between items-center px-6 py-4">
                <div class="text-xl font-serif font-bold text-cyan-400 cursor-default select-none">
                    {brand}
                </div>
                <ul class="hidden md:flex space-x-8 text-white font-semibold">
                    {sections
                        .into_iter()
                        .map(|section| {
                            let id = section.id;
                            let href = format!("#{id}");
                            let target = id.clone();
                            let is_active = Memo::new(move |_| active_id.with(|a| *a == id));
                            view! {
                                <li>
                                    <a
                                        href=href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            scroll_to(&target);
                                        }
                                        class=move || {
                                            if is_active.get() {
                                                "relative py-1 transition-colors duration-300 text-cyan-300"
                                            } else {
                                                "relative py-1 transition-colors duration-300 hover:text-cyan-300"
                                            }
                                        }
                                    >
                                        {section.label}
                                        <Show when=move || is_active.get()>
                                            <span
                                                class="absolute left-0 -bottom-1 w-full h-0.5 bg-cyan-400 rounded"
                                                aria-hidden="true"
                                            />
                                        </Show>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}
