use dominator::routing;
use futures_signals::signal::{Signal, SignalExt};
use manga_store_client::{Navigator, Route};

use crate::utils::pathname;

pub fn route_signal() -> impl Signal<Item = Route> {
    pathname_signal().map(|pathname| Route::from_path(&pathname))
}

pub fn current_route() -> Route {
    Route::from_path(&pathname(&routing::url().get_cloned()))
}

pub fn pathname_signal() -> impl Signal<Item = String> {
    routing::url().signal_ref(|url| pathname(url))
}

/// Navigates with the browser history
#[derive(Debug, Default, Clone, Copy)]
pub struct Router;

impl Navigator for Router {
    fn go_to(&self, route: &Route) {
        routing::go_to_url(&route.url());
    }
}
