use gloo_console::{error, info};
use gloo_utils::window;
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::Position;
use workout_tracker_lib::{config::TrackerConfig, location::Location};
use yew::Callback;

pub fn load_config() -> TrackerConfig {
    match serde_json::from_str::<TrackerConfig>(include_str!("../config.json")) {
        Ok(config) => config,
        Err(err) => {
            error!(format!("Invalid config.json, using defaults: {}", err));
            TrackerConfig::default()
        }
    }
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        error!(err);
    }
}

/// Asks the browser for the current position once. Exactly one of the callbacks is called,
/// or neither if the browser never answers.
pub fn request_position(on_success: Callback<Location>, on_error: Callback<()>) {
    let geolocation = match window().navigator().geolocation() {
        Ok(geolocation) => geolocation,
        Err(err) => {
            error!(err);
            on_error.emit(());
            return;
        }
    };

    let success = Closure::once_into_js(move |position: Position| {
        let coords = position.coords();
        info!(format!("Got position {:.5}, {:.5}", coords.latitude(), coords.longitude()));
        on_success.emit(Location::new(coords.latitude(), coords.longitude()));
    });

    let denied = on_error.clone();
    let failure = Closure::once_into_js(move |err: JsValue| {
        error!(err);
        denied.emit(());
    });

    if let Err(err) = geolocation.get_current_position_with_error_callback(success.unchecked_ref(), Some(failure.unchecked_ref())) {
        error!(err);
        on_error.emit(());
    }
}
