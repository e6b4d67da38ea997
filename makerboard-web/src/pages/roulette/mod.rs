pub mod handlers;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::level_card::LevelCard;
use crate::components::spinner::Spinner;
use crate::components::toast_stack::ToastStack;
use handlers::RouletteHandles;
use makerboard_core::TARGET_CLEARS;
#[cfg(target_arch = "wasm32")]
use state::RouletteAction;
use state::RouletteState;

#[function_component(RoulettePage)]
pub fn roulette_page() -> Html {
    let state = use_reducer(RouletteState::restored);
    let loading = use_state(|| false);
    let use_main = use_state(|| true);
    let use_extended = use_state(|| true);
    let file_input = use_node_ref();
    let expiry_armed = use_mut_ref(|| 0u64);

    {
        // One expiry timer per toast ever pushed, armed after each render.
        let state = state.clone();
        let expiry_armed = expiry_armed.clone();
        use_effect(move || {
            arm_toast_expiry(&state, &expiry_armed);
            || {}
        });
    }

    let handles = RouletteHandles {
        state: state.clone(),
        loading: loading.clone(),
        use_main: use_main.clone(),
        use_extended: use_extended.clone(),
        file_input: file_input.clone(),
    };
    let on_start = handlers::build_start(&handles);
    let on_complete = handlers::build_complete(&handles);
    let on_give_up = handlers::build_give_up(&handles);
    let on_reveal = handlers::build_reveal(&handles);
    let on_import = handlers::build_import_click(&handles);
    let on_file_selected = handlers::build_file_selected(&handles);
    let on_export = handlers::build_export(&handles);

    let on_toggle_main = {
        let use_main = use_main.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                use_main.set(input.checked());
            }
        })
    };
    let on_toggle_extended = {
        let use_extended = use_extended.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                use_extended.set(input.checked());
            }
        })
    };

    if *loading {
        return html! {
            <main class="page-roulette">
                <Spinner />
            </main>
        };
    }

    let session = state.engine.session();
    let resolved = session.resolved_count();
    let is_active = session.is_active();
    let given_up = session.given_up();
    let has_completed = session.completion().is_some();
    let show_remaining = state.show_remaining;
    let current = session.current().cloned();
    let toasts: Vec<String> = state.engine.toasts().iter().map(ToString::to_string).collect();
    let start_label = if session.levels().is_empty() {
        "Start"
    } else {
        "Restart"
    };

    let current_card = if let (Some(entry), false) = (&current, has_completed) {
        let actions = if given_up {
            Html::default()
        } else {
            html! {
                <form class="level-actions">
                    <Button label="Complete" onclick={on_complete} />
                    <Button label="Give Up" danger={true} onclick={on_give_up} />
                </form>
            }
        };
        html! {
            <LevelCard
                rank={entry.rank}
                name={entry.name.clone()}
                video={entry.video.clone()}
                status={entry.id.clone()}
            >
                { actions }
            </LevelCard>
        }
    } else {
        Html::default()
    };

    let results_block = if given_up || has_completed {
        let message = session
            .completion_message()
            .map(|text| html! { <p class="completion-message">{ text }</p> })
            .unwrap_or_default();
        let reveal = if given_up && resolved < TARGET_CLEARS {
            html! { <Button label="Show remaining levels" onclick={on_reveal} /> }
        } else {
            Html::default()
        };
        html! {
            <div class="results">
                <h1>{ "Results" }</h1>
                <p>{ format!("Number of levels completed: {resolved}") }</p>
                <p>{ format!("Target: {TARGET_CLEARS}") }</p>
                { message }
                { reveal }
            </div>
        }
    } else {
        Html::default()
    };

    let remaining_block = if show_remaining && (given_up || has_completed) {
        html! {
            <>
                { for session.remaining().iter().map(|entry| html! {
                    <LevelCard
                        rank={entry.rank}
                        name={entry.name.clone()}
                        video={entry.video.clone()}
                    />
                }) }
            </>
        }
    } else {
        Html::default()
    };

    html! {
        <main class="page-roulette">
            <div class="sidebar">
                <p class="hint">
                    { "Inspired by the Extreme Demon Roulette by matcool." }
                </p>
                <form class="options">
                    <div class="check">
                        <input
                            type="checkbox"
                            id="pool-main"
                            checked={*use_main}
                            onchange={on_toggle_main}
                        />
                        <label for="pool-main">{ "Main List" }</label>
                    </div>
                    <div class="check">
                        <input
                            type="checkbox"
                            id="pool-extended"
                            checked={*use_extended}
                            onchange={on_toggle_extended}
                        />
                        <label for="pool-extended">{ "Extended List" }</label>
                    </div>
                    <Button label={start_label} onclick={on_start} />
                </form>
                <p class="hint">{ "The roulette saves automatically." }</p>
                <form class="save">
                    <p>{ "Manual Load/Save" }</p>
                    <div class="save-buttons">
                        <Button label="Import" onclick={on_import} />
                        <Button label="Export" disabled={!is_active} onclick={on_export} />
                    </div>
                </form>
                <input
                    ref={file_input}
                    type="file"
                    accept=".json"
                    style="display: none"
                    onchange={on_file_selected}
                />
            </div>
            <section class="levels-container">
                <div class="levels">
                {
                    if session.levels().is_empty() {
                        html! {
                            <p class="empty-hint">
                                { "No levels loaded. Start a roulette to populate levels." }
                            </p>
                        }
                    } else {
                        html! {
                            <>
                                { for session.levels().iter().take(resolved).map(|entry| html! {
                                    <LevelCard
                                        rank={entry.rank}
                                        name={entry.name.clone()}
                                        video={entry.video.clone()}
                                        status="Completed"
                                        status_class={classes!("level-status-done")}
                                    />
                                }) }
                                { current_card }
                                { results_block }
                                { remaining_block }
                            </>
                        }
                    }
                }
                </div>
            </section>
            <div class="toasts-container">
                <ToastStack messages={toasts} />
            </div>
        </main>
    }
}

#[cfg(target_arch = "wasm32")]
fn arm_toast_expiry(state: &UseReducerHandle<RouletteState>, armed: &Rc<RefCell<u64>>) {
    let pushed = state.engine.toasts().pushed_total();
    let mut armed = armed.borrow_mut();
    while *armed < pushed {
        *armed += 1;
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = crate::dom::sleep_ms(makerboard_core::TOAST_TTL_MS).await;
            state.dispatch(RouletteAction::ExpireToast);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn arm_toast_expiry(state: &UseReducerHandle<RouletteState>, armed: &Rc<RefCell<u64>>) {
    *armed.borrow_mut() = state.engine.toasts().pushed_total();
}
