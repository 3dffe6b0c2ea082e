use std::cell::Cell;
use std::rc::Rc;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::{Arc, RwLock};

#[cfg(not(target_arch = "wasm32"))]
use reqwest::{
    Url,
    cookie::{CookieStore, Jar},
    header::HeaderValue,
};

/// The identity a transport speaks for.
///
/// Native builds keep the server's cookies in a jar owned by the session.
/// In the browser the cookies live in the browser's own store and the
/// session only tracks whether a login happened.
#[derive(Default)]
pub struct Session {
    #[cfg(not(target_arch = "wasm32"))]
    cookies: Arc<SessionCookies>,
    active: Cell<bool>,
}

impl Session {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn begin(&self) {
        info!("session started");
        self.active.set(true);
    }

    pub fn end(&self) {
        info!("session ended");
        self.active.set(false);
        #[cfg(not(target_arch = "wasm32"))]
        self.cookies.clear();
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn cookie_store(&self) -> Arc<SessionCookies> {
        self.cookies.clone()
    }
}

/// Cookie jar that can be emptied on logout
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct SessionCookies {
    jar: RwLock<Jar>,
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionCookies {
    pub fn clear(&self) {
        if let Ok(mut jar) = self.jar.write() {
            *jar = Jar::default();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CookieStore for SessionCookies {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        if let Ok(jar) = self.jar.read() {
            jar.set_cookies(cookie_headers, url);
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.jar.read().ok()?.cookies(url)
    }
}
