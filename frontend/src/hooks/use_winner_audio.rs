use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

/// Handle to the hidden winner-sound element. Playback problems (autoplay
/// policy, missing file) are logged and never surface to the game.
#[derive(Clone, PartialEq)]
pub struct WinnerAudio {
    pub node: NodeRef,
}

impl WinnerAudio {
    fn element(&self) -> Option<HtmlAudioElement> {
        let element = self.node.cast::<HtmlAudioElement>();
        if element.is_none() {
            log::debug!("Audio element not ready");
        }
        element
    }

    /// Plays and immediately pauses inside a user gesture so that later
    /// playback is not blocked by the browser.
    pub fn unlock(&self) {
        let Some(audio) = self.element() else { return };
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        let _ = audio.pause();
                        audio.set_current_time(0.0);
                        log::debug!("Audio unlocked");
                    }
                    Err(e) => log::debug!("Audio unlock attempt failed: {:?}", e),
                }
            }),
            Err(e) => log::debug!("Audio unlock attempt failed: {:?}", e),
        }
    }

    pub fn play(&self) {
        let Some(audio) = self.element() else { return };
        audio.set_current_time(0.0);
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Winner audio failed to play: {:?}", e);
                }
            }),
            Err(e) => log::warn!("Winner audio failed to play: {:?}", e),
        }
    }
}

#[hook]
pub fn use_winner_audio() -> WinnerAudio {
    let node = use_node_ref();
    WinnerAudio { node }
}
