use manga_store_lib::error::Error;

use crate::api::Api;
use crate::navigation::Navigator;
use crate::route::Route;
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl NavLink {
    /// Active only on an exact path match
    pub fn is_active(&self, pathname: &str) -> bool {
        self.route.url() == pathname
    }
}

pub fn links() -> [NavLink; 5] {
    [
        NavLink {
            label: "Home",
            route: Route::Home,
        },
        NavLink {
            label: "Search",
            route: Route::Search,
        },
        NavLink {
            label: "Profile",
            route: Route::Profile,
        },
        NavLink {
            label: "Login",
            route: Route::Login,
        },
        NavLink {
            label: "Register",
            route: Route::Register,
        },
    ]
}

/// Log out and go to the login screen whatever the server answered. The
/// server's error, if any, is still returned for display.
pub async fn logout<T, N>(api: &Api<T>, navigator: &N) -> Result<(), Error>
where
    T: Transport,
    N: Navigator + ?Sized,
{
    let result = api.logout().await;
    navigator.go_to(&Route::Login);
    result
}
