use leptos::{ev, prelude::*};
use leptos_use::{
    use_document, use_event_listener, use_interval, use_mouse, use_timeout_fn, use_window_scroll,
    UseIntervalReturn, UseMouseReturn, UseTimeoutFnReturn,
};

use super::preferences::use_preferences;
use crate::scroll::{percent, scroll_fraction, show_badge, show_scroll_top};

const LOADER_MS: f64 = 1500.0;
const LOADER_TICKS: u64 = 20;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let prefs = use_preferences();
    let (_, scroll_y) = use_window_scroll();
    let fraction = Memo::new(move |_| {
        let viewport = prefs.platform().viewport();
        scroll_fraction(
            scroll_y.get(),
            viewport.document_height,
            viewport.viewport_height,
        )
    });

    view! {
        <div
            class="fixed top-0 inset-x-0 h-1 z-50 origin-left bg-gradient-to-r from-purple-500 via-pink-500 to-orange-400"
            style=move || format!("transform: scaleX({})", fraction.get())
        ></div>
        <Show when=move || show_badge(scroll_y.get())>
            <div class="fixed top-3 right-4 z-50 px-2 py-1 rounded-full text-xs font-bold bg-background shadow">
                {move || format!("{}%", percent(fraction.get()))}
            </div>
        </Show>
    }
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let prefs = use_preferences();
    let (_, scroll_y) = use_window_scroll();

    view! {
        <Show when=move || show_scroll_top(scroll_y.get())>
            <button
                class="fixed bottom-6 right-6 z-40 w-12 h-12 rounded-full text-white text-xl shadow-xl bg-gradient-to-r from-purple-500 to-pink-500 hover:scale-110 transition-transform"
                aria-label=move || prefs.t().footer.back_to_top
                on:click=move |_| prefs.platform().scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}

#[component]
pub fn CustomCursor() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let (hovering, set_hovering) = signal(false);

    let _ = use_event_listener(use_document(), ev::mouseover, move |ev| {
        use wasm_bindgen::JsCast;

        let over_control = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a, button").ok().flatten())
            .is_some();
        set_hovering(over_control);
    });

    view! {
        <div
            class=move || {
                format!(
                    "cursor-dot hidden md:block {}",
                    if hovering() { "cursor-hover" } else { "" },
                )
            }
            style=move || format!("transform: translate({}px, {}px)", x.get(), y.get())
        ></div>
    }
}

/// Full-screen splash shown until shortly after hydration.
#[component]
pub fn Loader() -> impl IntoView {
    let (visible, set_visible) = signal(true);
    let UseIntervalReturn { counter, pause, .. } = use_interval(LOADER_MS as u64 / LOADER_TICKS);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            pause();
            set_visible(false);
        },
        LOADER_MS,
    );
    Effect::new(move |_| start(()));

    let progress = move || (counter.get() * 100 / LOADER_TICKS).min(100);

    view! {
        <Show when=visible>
            <div class="loader fixed inset-0 z-[100] flex flex-col items-center justify-center gap-6 bg-background">
                <span class="text-5xl font-extrabold text-gradient animate-pulse">
                    {crate::content::PERSONAL_INFO.initials}
                </span>
                <div class="w-48 h-1 rounded-full bg-muted/20 overflow-hidden">
                    <div
                        class="h-1 bg-gradient-to-r from-purple-500 to-pink-500 transition-all"
                        style=move || format!("width: {}%", progress())
                    ></div>
                </div>
            </div>
        </Show>
    }
}
