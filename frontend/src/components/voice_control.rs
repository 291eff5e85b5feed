use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Reflect};
use spinwheel_shared::constants::VOICE_STOP_DELAY_MS;
use spinwheel_shared::voice::{collect_transcript, should_trigger, RecognitionResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, EventTarget};
use yew::prelude::*;

/// Thin wrapper over the browser's (possibly vendor-prefixed) speech
/// recognition object, driven through reflection so that browsers without
/// it simply report the capability as missing.
#[derive(Clone)]
struct Recognizer {
    inner: JsValue,
}

impl Recognizer {
    fn detect() -> Option<Self> {
        let window = window()?;
        let constructor = ["SpeechRecognition", "webkitSpeechRecognition"]
            .iter()
            .find_map(|key| {
                Reflect::get(&window, &JsValue::from_str(key))
                    .ok()
                    .filter(|value| value.is_function())
            })?
            .unchecked_into::<Function>();

        let inner = match Reflect::construct(&constructor, &Array::new()) {
            Ok(inner) => inner,
            Err(e) => {
                log::warn!("Speech recognition could not be created: {:?}", e);
                return None;
            }
        };

        let recognizer = Self { inner };
        recognizer.set("continuous", &JsValue::TRUE);
        recognizer.set("interimResults", &JsValue::TRUE);
        recognizer.set("lang", &JsValue::from_str("en-US"));
        Some(recognizer)
    }

    fn set(&self, key: &str, value: &JsValue) {
        if let Err(e) = Reflect::set(&self.inner, &JsValue::from_str(key), value) {
            log::warn!("Could not set recognition option {}: {:?}", key, e);
        }
    }

    fn call(&self, method: &str) {
        let result = Reflect::get(&self.inner, &JsValue::from_str(method))
            .and_then(|f| f.dyn_into::<Function>().map_err(JsValue::from))
            .and_then(|f| f.call0(&self.inner));
        if let Err(e) = result {
            log::warn!("Speech recognition {} failed: {:?}", method, e);
        }
    }

    fn start(&self) {
        self.call("start");
    }

    fn stop(&self) {
        self.call("stop");
    }

    fn target(&self) -> &EventTarget {
        self.inner.unchecked_ref()
    }
}

fn read_results(event: &JsValue) -> Vec<RecognitionResult> {
    let get = |target: &JsValue, key: &str| Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED);

    let first = get(event, "resultIndex").as_f64().unwrap_or(0.0) as u32;
    let results = get(event, "results");
    let length = get(&results, "length").as_f64().unwrap_or(0.0) as u32;

    (first..length)
        .filter_map(|i| Reflect::get_u32(&results, i).ok())
        .map(|result| {
            let alternative = Reflect::get_u32(&result, 0).unwrap_or(JsValue::UNDEFINED);
            RecognitionResult {
                transcript: get(&alternative, "transcript").as_string().unwrap_or_default(),
                is_final: get(&result, "isFinal").as_bool().unwrap_or(false),
            }
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct VoiceControlProps {
    /// Invoked when a trigger phrase is heard. Same entry point as the
    /// start button.
    pub on_command: Callback<()>,
}

#[function_component(VoiceControl)]
pub fn voice_control(props: &VoiceControlProps) -> Html {
    let recognizer = use_memo((), |_| {
        let recognizer = Recognizer::detect();
        if recognizer.is_none() {
            log::info!("Speech recognition not supported in this browser");
        }
        recognizer
    });
    let is_listening = use_state(|| false);
    let transcript = use_state(String::new);
    let error = use_state(String::new);

    // Latest command callback; the listeners outlive individual renders
    let on_command = use_mut_ref(|| props.on_command.clone());
    *on_command.borrow_mut() = props.on_command.clone();

    {
        let recognizer = recognizer.clone();
        let is_listening = is_listening.clone();
        let transcript = transcript.clone();
        let error = error.clone();
        let on_command = on_command.clone();

        use_effect_with((), move |_| {
            let listeners: Vec<EventListener> = match &*recognizer {
                Some(recognizer) => {
                    let target = recognizer.target();
                    let on_start = {
                        let is_listening = is_listening.clone();
                        let error = error.clone();
                        EventListener::new(target, "start", move |_| {
                            log::debug!("Listening for voice commands");
                            is_listening.set(true);
                            error.set(String::new());
                        })
                    };
                    let on_end = {
                        let is_listening = is_listening.clone();
                        EventListener::new(target, "end", move |_| {
                            log::debug!("Stopped listening");
                            is_listening.set(false);
                        })
                    };
                    let on_error = {
                        let error = error.clone();
                        EventListener::new(target, "error", move |event| {
                            let reason = Reflect::get(event, &JsValue::from_str("error"))
                                .ok()
                                .and_then(|v| v.as_string())
                                .unwrap_or_else(|| "unknown".to_string());
                            log::warn!("Speech recognition error: {}", reason);
                            error.set(format!("Error: {}", reason));
                        })
                    };
                    let on_result = {
                        let recognizer = Rc::new(recognizer.clone());
                        EventListener::new(target, "result", move |event| {
                            let heard = collect_transcript(&read_results(event));
                            log::debug!("Heard: {}", heard.text);
                            if should_trigger(&heard) {
                                log::info!("Voice command detected, starting spin");
                                transcript.set("Command detected! ✅".to_string());
                                let command = on_command.borrow().clone();
                                command.emit(());
                                let recognizer = recognizer.clone();
                                spawn_local(async move {
                                    TimeoutFuture::new(VOICE_STOP_DELAY_MS).await;
                                    recognizer.stop();
                                });
                            } else {
                                transcript.set(heard.text);
                            }
                        })
                    };
                    vec![on_start, on_end, on_error, on_result]
                }
                None => Vec::new(),
            };
            move || drop(listeners)
        });
    }

    let Some(active) = (*recognizer).clone() else {
        // capability missing: no control at all
        return html! {};
    };

    let start_listening = {
        let recognizer = active.clone();
        let is_listening = is_listening.clone();
        let transcript = transcript.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            if !*is_listening {
                transcript.set(String::new());
                error.set(String::new());
                recognizer.start();
            }
        })
    };

    let stop_listening = {
        let recognizer = active;
        let is_listening = is_listening.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_listening {
                recognizer.stop();
            }
        })
    };

    html! {
        <div class="mt-3">
            <div class="flex gap-2">
                <button
                    onclick={start_listening}
                    disabled={*is_listening}
                    class={classes!(
                        "flex-1", "px-3", "py-2", "rounded-md", "text-xs", "font-semibold", "text-white",
                        if *is_listening { "bg-red-500 opacity-70 cursor-not-allowed" } else { "bg-green-600 hover:bg-green-700" }
                    )}
                >
                    {if *is_listening { "🎤 Listening..." } else { "🎤 Start Listening" }}
                </button>
                <button
                    onclick={stop_listening}
                    disabled={!*is_listening}
                    class="flex-1 px-3 py-2 rounded-md text-xs font-semibold text-white bg-gray-500 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {"Stop Listening"}
                </button>
            </div>
            {if !transcript.is_empty() {
                html! { <div class={crate::styles::ALERT_INFO}>{format!("Heard: \"{}\"", *transcript)}</div> }
            } else {
                html! {}
            }}
            {if !error.is_empty() {
                html! { <div class={crate::styles::ALERT_ERROR}>{(*error).clone()}</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
