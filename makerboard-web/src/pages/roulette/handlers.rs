//! Callback builders for the roulette page. Each one closes over the state
//! handles it needs and dispatches reducer actions; the engine itself stays
//! behind the reducer.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::state::{RouletteAction, RouletteState};
#[cfg(target_arch = "wasm32")]
use makerboard_core::MSG_LIST_BROKEN;
use makerboard_core::{EXPORT_FILE_NAME, MSG_RUN_IN_PROGRESS, PoolSelection};

const IMPORT_OVERWRITE_PROMPT: &str =
    "This will overwrite the currently running roulette. Continue?";

#[derive(Clone)]
pub struct RouletteHandles {
    pub state: UseReducerHandle<RouletteState>,
    pub loading: UseStateHandle<bool>,
    pub use_main: UseStateHandle<bool>,
    pub use_extended: UseStateHandle<bool>,
    pub file_input: NodeRef,
}

pub fn build_start(handles: &RouletteHandles) -> Callback<MouseEvent> {
    let state = handles.state.clone();
    let loading = handles.loading.clone();
    let use_main = handles.use_main.clone();
    let use_extended = handles.use_extended.clone();
    Callback::from(move |_| {
        if state.engine.session().is_active() {
            state.dispatch(RouletteAction::Notify(MSG_RUN_IN_PROGRESS.to_string()));
            return;
        }
        let pools = PoolSelection {
            main: *use_main,
            extended: *use_extended,
        };
        if !pools.any() {
            // Nothing selected: not even worth a toast.
            return;
        }
        loading.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            let state = state.clone();
            let loading = loading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match crate::content::fetch_list().await {
                    Ok(list) => {
                        let seed = js_sys::Date::now().to_bits();
                        state.dispatch(RouletteAction::Start { list, pools, seed });
                    }
                    Err(err) => {
                        log::error!("list fetch failed: {err}");
                        state.dispatch(RouletteAction::Notify(MSG_LIST_BROKEN.to_string()));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        loading.set(false);
    })
}

pub fn build_complete(handles: &RouletteHandles) -> Callback<MouseEvent> {
    let state = handles.state.clone();
    Callback::from(move |_| state.dispatch(RouletteAction::Complete))
}

pub fn build_give_up(handles: &RouletteHandles) -> Callback<MouseEvent> {
    let state = handles.state.clone();
    Callback::from(move |_| state.dispatch(RouletteAction::GiveUp))
}

pub fn build_reveal(handles: &RouletteHandles) -> Callback<MouseEvent> {
    let state = handles.state.clone();
    Callback::from(move |_| state.dispatch(RouletteAction::RevealRemaining))
}

/// Opens the (hidden) file picker, after the overwrite confirmation when a
/// run is underway.
pub fn build_import_click(handles: &RouletteHandles) -> Callback<MouseEvent> {
    let state = handles.state.clone();
    let file_input = handles.file_input.clone();
    Callback::from(move |_| {
        if state.engine.session().is_active() && !crate::dom::confirm(IMPORT_OVERWRITE_PROMPT) {
            return;
        }
        if let Some(input) = file_input.cast::<HtmlInputElement>() {
            input.click();
        }
    })
}

pub fn build_file_selected(handles: &RouletteHandles) -> Callback<Event> {
    let state = handles.state.clone();
    Callback::from(move |event: Event| {
        let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again later.
        input.set_value("");
        if file.type_() != "application/json" {
            state.dispatch(RouletteAction::RejectImport);
            return;
        }
        #[cfg(target_arch = "wasm32")]
        {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.text()).await {
                    Ok(text) => state.dispatch(RouletteAction::Import(
                        text.as_string().unwrap_or_default(),
                    )),
                    Err(err) => {
                        log::warn!(
                            "import file could not be read: {}",
                            crate::dom::js_error_message(&err)
                        );
                        state.dispatch(RouletteAction::RejectImport);
                    }
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = file;
    })
}

pub fn build_export(handles: &RouletteHandles) -> Callback<MouseEvent> {
    let state = handles.state.clone();
    Callback::from(move |_| {
        let Some(text) = state.engine.export_json() else {
            return;
        };
        if let Err(err) = crate::dom::download_json(EXPORT_FILE_NAME, &text) {
            log::error!("export failed: {}", crate::dom::js_error_message(&err));
        }
    })
}
