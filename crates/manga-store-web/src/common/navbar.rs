use std::rc::Rc;

use dominator::{Dom, clone, events, html, link};
use futures_signals::signal::SignalExt;
use manga_store_client::{Route, navbar as nav};

use super::{Router, pathname_signal, snackbar};
use crate::app::StoreApi;
use crate::request::RequestSlot;

pub struct Navbar {
    api: Rc<StoreApi>,
    request: RequestSlot,
}

impl Navbar {
    pub fn new(api: Rc<StoreApi>) -> Rc<Self> {
        Rc::new(Self {
            api,
            request: RequestSlot::new(),
        })
    }

    fn logout(navbar: Rc<Self>) {
        navbar.request.spawn(clone!(navbar => async move {
            if let Err(e) = nav::logout(&navbar.api, &Router).await {
                snackbar::show_error("Logout", &e);
            }
        }));
    }

    pub fn render(navbar: Rc<Self>) -> Dom {
        html!("nav", {
            .class("navbar")
            .children(&mut [
                html!("div", {
                    .class("navbar-logo")
                    .children(&mut [
                        link!(Route::Home.url(), {
                            .text("MangaStore")
                        })
                    ])
                }),
                html!("ul", {
                    .class("navbar-links")
                    .apply(|dom| nav::links().into_iter().fold(dom, |dom, nav_link| {
                        let url = nav_link.route.url();
                        let label = nav_link.label;
                        dom.child(html!("li", {
                            .class_signal("active", pathname_signal().map(move |pathname| nav_link.is_active(&pathname)))
                            .children(&mut [
                                link!(url, {
                                    .text(label)
                                })
                            ])
                        }))
                    }))
                    .children(&mut [
                        html!("li", {
                            .children(&mut [
                                html!("button", {
                                    .class("logout-button")
                                    .text("Logout")
                                    .event(clone!(navbar => move |_: events::Click| {
                                        Self::logout(navbar.clone());
                                    }))
                                })
                            ])
                        })
                    ])
                })
            ])
        })
    }
}
