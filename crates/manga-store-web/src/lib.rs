#[macro_use]
extern crate log;

mod app;
mod auth;
mod common;
mod home;
mod manga;
mod profile;
mod request;
mod search;
mod utils;

use wasm_bindgen::prelude::*;

use app::App;

#[wasm_bindgen(start)]
pub async fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = utils::initialize_api_host() {
        error!("{}", e);
    }

    let app = App::new().map_err(|e| JsValue::from_str(&e.to_string()))?;
    dominator::append_dom(&dominator::body(), App::render(app));

    Ok(())
}
