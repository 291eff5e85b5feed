mod spin_driver;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use spinwheel_shared::constants::CONFETTI_MS;
use spinwheel_shared::entrants::load_names;
use spinwheel_shared::{Roster, SpinOutcome, WheelConfig, WheelState};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{Celebration, NamesInput, VoiceControl, WinnersSidebar};
use crate::hooks::{use_ledger, use_winner_audio, LedgerAction};
use crate::styles;

use spin_driver::SpinDriver;
use wheel_canvas::WheelCanvas;
use wheel_utils::{SelectedDisplay, SpinButton};

#[derive(Clone, PartialEq)]
struct Selected {
    name: String,
    color: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct WheelGameProps {
    pub config: WheelConfig,
}

#[function_component(WheelGame)]
pub fn wheel_game(props: &WheelGameProps) -> Html {
    let config = props.config.clone();

    let names_text = use_state(|| config.default_names.join("\n"));
    let roster = use_state(|| Roster::from(config.default_names.as_slice()));
    let wheel_state = use_state(|| WheelState { current_rotation: 0.0, is_spinning: false, last_winner_index: None });
    let selected = use_state(|| None::<Selected>);
    let celebration = use_state(|| None::<Selected>);
    let confetti = use_state(|| false);

    let ledger = use_ledger(config.points_per_win);
    let audio = use_winner_audio();

    // Bumped per win so a stale hide timer leaves a newer banner alone
    let celebration_round = use_mut_ref(|| 0u32);

    let driver = {
        let wheel_state = wheel_state.clone();
        let selected = selected.clone();
        let celebration = celebration.clone();
        let confetti = confetti.clone();
        let ledger = ledger.clone();
        let audio = audio.clone();
        let celebration_round = celebration_round.clone();
        let config = config.clone();

        use_memo((), move |_| {
            let celebration_ms = config.celebration_ms;
            let on_state = Callback::from(move |state: WheelState| wheel_state.set(state));
            let on_winner = Callback::from(move |outcome: SpinOutcome| {
                ledger.dispatch(LedgerAction::RecordWin(outcome.winner_name.clone()));

                let winner = Selected { color: outcome.color(), name: outcome.winner_name };
                selected.set(Some(winner.clone()));
                celebration.set(Some(winner));
                confetti.set(true);
                audio.play();

                let round = {
                    let mut round = celebration_round.borrow_mut();
                    *round = round.wrapping_add(1);
                    *round
                };
                schedule_hide(celebration_round.clone(), round, celebration_ms, {
                    let celebration = celebration.clone();
                    move || celebration.set(None)
                });
                schedule_hide(celebration_round.clone(), round, CONFETTI_MS, {
                    let confetti = confetti.clone();
                    move || confetti.set(false)
                });
            });

            SpinDriver::new(Roster::from(config.default_names.as_slice()), config, on_state, on_winner)
        })
    };

    let on_names_change = {
        let names_text = names_text.clone();
        Callback::from(move |text: String| names_text.set(text))
    };

    let apply_names = {
        let names_text = names_text.clone();
        let roster = roster.clone();
        let driver = driver.clone();
        let defaults = config.default_names.clone();
        move || -> bool {
            let next = Roster::new(load_names(&names_text, &defaults));
            match driver.set_roster(next.clone()) {
                Ok(()) => {
                    roster.set(next);
                    true
                }
                Err(e) => {
                    log::warn!("Could not load names: {}", e);
                    false
                }
            }
        }
    };

    let on_load = {
        let apply_names = apply_names.clone();
        Callback::from(move |_: ()| {
            apply_names();
        })
    };

    let start_play = {
        let selected = selected.clone();
        let celebration = celebration.clone();
        let confetti = confetti.clone();
        let audio = audio.clone();
        let driver = driver.clone();
        Callback::from(move |_: ()| {
            if driver.is_spinning() {
                log::debug!("Start requested while spinning, ignoring");
                return;
            }
            if !apply_names() {
                return;
            }
            selected.set(None);
            celebration.set(None);
            confetti.set(false);
            audio.unlock();
            if let Err(e) = driver.request_spin() {
                log::warn!("Spin not started: {}", e);
            }
        })
    };

    let on_spin_click = {
        let start_play = start_play.clone();
        Callback::from(move |_: MouseEvent| start_play.emit(()))
    };

    let (selected_name, selected_color) = match &*selected {
        Some(winner) => (Some(winner.name.clone()), winner.color),
        None => (None, ""),
    };
    let (celebration_name, celebration_color) = match &*celebration {
        Some(winner) => (Some(winner.name.clone()), winner.color),
        None => (None, ""),
    };

    html! {
        <div class={styles::PAGE}>
            <WinnersSidebar records={ledger.ledger.all_records()} />
            <main class={styles::MAIN}>
                <div class="px-5 pt-5">
                    <h1 class={styles::TEXT_H1}>{"🎡 Spin the Wheel"}</h1>
                    <p class={styles::TEXT_SMALL}>{"Load some names, then press Start Play or say \"start the game\"."}</p>
                </div>
                <div class={styles::MAIN_GRID}>
                    <div class={styles::CARD_CENTERED}>
                        <WheelCanvas
                            roster={(*roster).clone()}
                            rotation={wheel_state.current_rotation}
                            is_spinning={wheel_state.is_spinning}
                            highlight={wheel_state.last_winner_index}
                        />
                    </div>
                    <div class={styles::CARD}>
                        <h3 class={styles::TEXT_H3}>{"Players"}</h3>
                        <NamesInput
                            value={AttrValue::from((*names_text).clone())}
                            on_change={on_names_change}
                            {on_load}
                            disabled={wheel_state.is_spinning}
                        />
                        <p class={styles::TEXT_HINT}>
                            {if roster.is_placeholder() {
                                "No names on the wheel".to_string()
                            } else {
                                format!("{} on the wheel", roster.len())
                            }}
                        </p>
                        <div class="mt-4">
                            <SpinButton is_spinning={wheel_state.is_spinning} onclick={on_spin_click} />
                        </div>
                        <VoiceControl on_command={start_play} />
                        <SelectedDisplay name={selected_name} color={AttrValue::from(selected_color)} />
                    </div>
                </div>
            </main>
            <Celebration name={celebration_name} color={AttrValue::from(celebration_color)} confetti={*confetti} />
            <audio ref={audio.node.clone()} preload="auto" class="hidden">
                <source src="/static/sounds/winner.mp3" type="audio/mpeg" />
                <source src="/static/sounds/winner.ogg" type="audio/ogg" />
            </audio>
        </div>
    }
}

fn schedule_hide(round: Rc<RefCell<u32>>, expected: u32, delay_ms: u32, hide: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if *round.borrow() == expected {
            hide();
        }
    });
}
