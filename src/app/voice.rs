use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::preferences::use_preferences;
use crate::voice::TOAST_MS;

#[component]
pub fn VoiceCommands() -> impl IntoView {
    let prefs = use_preferences();
    let (supported, set_supported) = signal(false);
    let (listening, set_listening) = signal(false);
    let (toast, set_toast) = signal(None::<String>);

    let UseTimeoutFnReturn {
        start: start_hide,
        stop: stop_hide,
        ..
    } = use_timeout_fn(move |_: ()| set_toast(None), TOAST_MS);
    let show = Callback::new(move |msg: String| {
        stop_hide();
        set_toast(Some(msg));
        start_hide(());
    });

    #[cfg(feature = "hydrate")]
    let session = StoredValue::new_local(None::<recognition::Session>);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::voice::{interpret, RECOGNITION_ERROR};

        let on_transcript = move |transcript: String| {
            log::debug!("voice command: {transcript}");
            let platform = prefs.platform();
            let mut theme = prefs;
            let msg = interpret(&transcript).execute(&*platform, &mut theme);
            show.run(msg);
        };
        let on_error = move |error: String| {
            log::warn!("speech recognition error: {error}");
            set_listening(false);
            show.run(RECOGNITION_ERROR.to_string());
        };
        let on_end = move || set_listening(false);

        if let Some(s) = recognition::Session::new(on_transcript, on_error, on_end) {
            session.set_value(Some(s));
            set_supported(true);
        }
    });

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        session.update_value(|s| {
            if let Some(s) = s.take() {
                s.stop();
            }
        })
    });

    let toggle = move |_| {
        #[cfg(feature = "hydrate")]
        session.with_value(|s| {
            use crate::voice::{LISTENING, START_FAILED};

            let Some(s) = s else {
                return;
            };
            if listening.get_untracked() {
                s.stop();
                set_listening(false);
            } else if s.start() {
                set_listening(true);
                show.run(LISTENING.to_string());
            } else {
                show.run(START_FAILED.to_string());
            }
        });
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = (prefs, set_supported, set_listening, show);

    view! {
        <button
            class=move || {
                format!(
                    "fixed bottom-24 right-6 z-50 p-4 rounded-full shadow-2xl text-white text-2xl transition-all duration-300 {}",
                    if listening() {
                        "bg-red-500 hover:bg-red-600 animate-pulse"
                    } else {
                        "bg-gradient-to-r from-purple-500 to-pink-500 hover:from-purple-600 hover:to-pink-600"
                    },
                )
            }
            class:hidden=move || !supported()
            title="Voice Commands (Click to activate)"
            on:click=toggle
        >
            {move || if listening() { "🎙️" } else { "🎤" }}
        </button>
        {move || {
            toast
                .get()
                .map(|msg| {
                    view! {
                        <div class="fixed bottom-40 right-6 z-50 max-w-sm px-6 py-4 rounded-lg shadow-2xl text-white bg-gradient-to-r from-purple-600 to-pink-600 border-2 border-white/20">
                            "🔊 "
                            {msg}
                        </div>
                    }
                })
        }}
    }
}

#[cfg(feature = "hydrate")]
mod recognition {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{SpeechRecognition, SpeechRecognitionEvent};

    use crate::voice::RECOGNITION_LOCALE;

    /// One browser recognition object plus the handlers it calls back into.
    pub struct Session {
        inner: SpeechRecognition,
        _on_result: Closure<dyn FnMut(SpeechRecognitionEvent)>,
        _on_error: Closure<dyn FnMut(web_sys::Event)>,
        _on_end: Closure<dyn FnMut()>,
    }

    fn constructor() -> Option<Function> {
        let window = web_sys::window()?;
        ["SpeechRecognition", "webkitSpeechRecognition"]
            .into_iter()
            .filter_map(|name| Reflect::get(&window, &JsValue::from_str(name)).ok())
            .find(|ctor| ctor.is_function())
            .map(|ctor| ctor.unchecked_into())
    }

    impl Session {
        /// `None` when the browser has no speech recognition.
        pub fn new(
            mut on_transcript: impl FnMut(String) + 'static,
            mut on_error: impl FnMut(String) + 'static,
            mut on_end: impl FnMut() + 'static,
        ) -> Option<Self> {
            let ctor = constructor()?;
            let inner: SpeechRecognition = Reflect::construct(&ctor, &Array::new())
                .ok()?
                .unchecked_into();
            inner.set_continuous(false);
            inner.set_interim_results(false);
            inner.set_lang(RECOGNITION_LOCALE);

            let on_result = Closure::<dyn FnMut(SpeechRecognitionEvent)>::new(
                move |ev: SpeechRecognitionEvent| {
                    let transcript = ev
                        .results()
                        .and_then(|results| results.get(0))
                        .and_then(|result| result.get(0))
                        .map(|alt| alt.transcript());
                    if let Some(transcript) = transcript {
                        on_transcript(transcript.to_lowercase());
                    }
                },
            );
            let on_error_cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
                let error = Reflect::get(&ev, &JsValue::from_str("error"))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default();
                on_error(error);
            });
            let on_end_cb = Closure::<dyn FnMut()>::new(move || on_end());

            inner.set_onresult(Some(on_result.as_ref().unchecked_ref()));
            inner.set_onerror(Some(on_error_cb.as_ref().unchecked_ref()));
            inner.set_onend(Some(on_end_cb.as_ref().unchecked_ref()));

            Some(Self {
                inner,
                _on_result: on_result,
                _on_error: on_error_cb,
                _on_end: on_end_cb,
            })
        }

        /// Returns false if the browser refused to start listening.
        pub fn start(&self) -> bool {
            match self.inner.start() {
                Ok(()) => true,
                Err(e) => {
                    log::error!("could not start speech recognition: {e:?}");
                    false
                }
            }
        }

        pub fn stop(&self) {
            self.inner.stop();
        }
    }

    impl Drop for Session {
        fn drop(&mut self) {
            self.inner.set_onresult(None);
            self.inner.set_onerror(None);
            self.inner.set_onend(None);
        }
    }
}
