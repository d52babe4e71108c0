use leptos::{either::Either, prelude::*};

use crate::content::{anchors, Profile};
use crate::ornament::{ring_points, RingLayer, DOT_RADIUS, RING_LAYERS};
use crate::typing::{Playback, TypingAnimator, TypingConfig};

#[component]
pub fn Hero(profile: &'static Profile, config: TypingConfig) -> impl IntoView {
    view! {
        <section
            id=anchors::HOME
            class="relative flex flex-col justify-center items-center h-screen bg-gradient-to-br from-blue-950 to-blue-400 text-white overflow-hidden pt-16"
        >
            <div class="relative flex justify-center items-center">
                <div class="relative z-10 rounded-full overflow-hidden w-52 h-52 border-4 border-blue-400">
                    <img
                        src=profile.image.as_str()
                        alt=profile.name.as_str()
                        class="w-full h-full object-cover rounded-full"
                    />
                </div>
                {RING_LAYERS
                    .into_iter()
                    .map(|layer| view! { <DottedRing layer /> })
                    .collect_view()}
            </div>
            <TypingHeadline config fallback=profile.name.clone() />
            <p class="mt-8 max-w-xl text-center text-lg md:text-xl font-light tracking-wide animate-fade-in-delay">
                {profile.tagline.as_str()}
            </p>
        </section>
    }
}

#[component]
pub fn DottedRing(layer: RingLayer) -> impl IntoView {
    let size = layer.size.to_string();
    view! {
        <svg
            class=format!("absolute -translate-x-1/2 -translate-y-1/2 {}", layer.spin_class)
            width=size.clone()
            height=size
            style="overflow: visible"
            aria-hidden="true"
        >
            {ring_points(layer.size, layer.dots)
                .into_iter()
                .map(|(x, y)| {
                    view! {
                        <circle
                            cx=format!("{x:.2}")
                            cy=format!("{y:.2}")
                            r=DOT_RADIUS.to_string()
                            fill=layer.color
                        />
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Sets one host timeout for the playback's next wake-up. Each firing
/// advances the playback by exactly the delay it was scheduled for, then
/// schedules the following one.
fn schedule_next(
    playback: StoredValue<Playback>,
    pending: StoredValue<Option<TimeoutHandle>>,
    set_text: WriteSignal<String>,
) {
    let Some(delay) = playback.try_with_value(Playback::next_wake).flatten() else {
        return;
    };
    let res = set_timeout_with_handle(
        move || {
            let Some(changed) = playback.try_update_value(|p| p.advance(delay)) else {
                // unmounted
                return;
            };
            if changed {
                set_text.set(playback.with_value(Playback::display));
            }
            schedule_next(playback, pending, set_text);
        },
        delay,
    );
    match res {
        Ok(handle) => pending.set_value(Some(handle)),
        Err(e) => log::warn!("couldn't schedule typing animation: {e:?}"),
    }
}

#[component]
pub fn TypingHeadline(config: TypingConfig, fallback: String) -> impl IntoView {
    let animator = match TypingAnimator::new(config) {
        Ok(a) => a,
        Err(e) => {
            log::warn!("typing animation disabled: {e}");
            return Either::Right(view! {
                <h1 class="mt-20 text-4xl md:text-6xl font-bold font-serif text-cyan-400 select-none">
                    {fallback}
                </h1>
            });
        }
    };

    let playback = Playback::start(animator);
    let (text, set_text) = signal(playback.display());
    let playback = StoredValue::new(playback);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| schedule_next(playback, pending, set_text));

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
        playback.try_update_value(Playback::stop);
    });

    Either::Left(view! {
        <h1 class="mt-20 text-4xl md:text-6xl font-bold font-serif bg-gradient-to-r from-cyan-400 to-blue-400 bg-clip-text text-transparent select-none whitespace-pre">
            {move || text.get()}
        </h1>
    })
}
