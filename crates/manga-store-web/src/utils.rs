use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use web_sys::Window;

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static API_HOST: std::cell::RefCell<String> = std::cell::RefCell::new("/".to_string());
}

/// Resolve the API origin, `window.__MANGA_STORE_API__` wins over the page
/// origin when it is set.
pub fn initialize_api_host() -> Result<(), anyhow::Error> {
    let api_host = match js_sys::eval("window.__MANGA_STORE_API__") {
        Ok(val) if val.is_string() => val.as_string().unwrap_or_default(),
        _ => window()
            .location()
            .origin()
            .map_err(|e| anyhow!("error get origin: {:?}", e))?,
    };

    info!("api host {}", api_host);
    API_HOST.with(|s| *s.borrow_mut() = api_host);

    Ok(())
}

pub fn api_host() -> String {
    API_HOST.with(|v| v.borrow().clone())
}

/// Blocking notification
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        error!("error show alert: {:?}", e);
    }
}

pub fn pathname(url: &str) -> String {
    web_sys::Url::new(url)
        .map(|url| url.pathname())
        .unwrap_or_default()
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

