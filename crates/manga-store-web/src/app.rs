use std::rc::Rc;

use dominator::{Dom, clone, html};
use futures_signals::signal::SignalExt;
use manga_store_client::{Api, ClientConfig, Error, HttpTransport, Navigator, Route};

use crate::auth::{AuthForm, AuthMode};
use crate::common::{Navbar, Router, route_signal, snackbar};
use crate::home::Home;
use crate::manga::Manga;
use crate::profile::Profile;
use crate::search::Search;
use crate::utils::api_host;

pub type StoreApi = Api<HttpTransport>;

pub struct App {
    pub api: Rc<StoreApi>,
    navbar: Rc<Navbar>,
}

impl App {
    pub fn new() -> Result<Rc<Self>, Error> {
        let api = Rc::new(Api::http(ClientConfig::new(api_host()))?);

        Ok(Rc::new(App {
            navbar: Navbar::new(api.clone()),
            api,
        }))
    }

    pub fn render(app: Rc<Self>) -> Dom {
        html!("div", {
            .class("App")
            .children(&mut [
                Navbar::render(app.navbar.clone()),
            ])
            .child_signal(route_signal().dedupe_cloned().map(clone!(app => move |route| {
                info!("route {:?}", route);
                match route {
                    Route::Root => {
                        Router.go_to(&Route::Home);
                        None
                    }
                    Route::Login => Some(
                        AuthForm::render(AuthForm::new(AuthMode::Login, app.api.clone()))
                    ),
                    Route::Register => Some(
                        AuthForm::render(AuthForm::new(AuthMode::Register, app.api.clone()))
                    ),
                    Route::Home => Some(
                        Home::render(Home::new(app.api.clone()))
                    ),
                    Route::Manga(manga_id) => Some(
                        Manga::render(Manga::new(manga_id, app.api.clone()))
                    ),
                    Route::Search => Some(
                        Search::render(Search::new(app.api.clone()))
                    ),
                    Route::Profile => Some(
                        Profile::render(Profile::new(app.api.clone()))
                    ),
                    Route::NotFound => Some(
                        html!("div", {
                            .text("not found")
                        }),
                    )
                }
            })))
            .children(&mut [
                snackbar::render(),
            ])
        })
    }
}
