use std::rc::Rc;

use dominator::{Dom, EventOptions, clone, events, html, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use manga_store_client::{Credentials, auth};
use web_sys::HtmlInputElement;

use crate::app::StoreApi;
use crate::common::{Router, snackbar};
use crate::request::RequestSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }
}

pub struct AuthForm {
    mode: AuthMode,
    email: Mutable<String>,
    password: Mutable<String>,
    api: Rc<StoreApi>,
    request: RequestSlot,
}

impl AuthForm {
    pub fn new(mode: AuthMode, api: Rc<StoreApi>) -> Rc<Self> {
        Rc::new(Self {
            mode,
            email: Mutable::new("".to_string()),
            password: Mutable::new("".to_string()),
            api,
            request: RequestSlot::new(),
        })
    }

    fn submit(form: Rc<Self>) {
        let credentials = Credentials::new(form.email.get_cloned(), form.password.get_cloned());
        form.request.spawn(clone!(form => async move {
            let result = match form.mode {
                AuthMode::Login => auth::login(&form.api, &Router, credentials).await,
                AuthMode::Register => auth::register(&form.api, &Router, credentials).await,
            };

            if let Err(e) = result {
                snackbar::show_error(form.mode.title(), &e);
            }
        }));
    }

    pub fn render(form: Rc<Self>) -> Dom {
        html!("div", {
            .class("form-container")
            .after_removed(clone!(form => move |_| form.request.cancel()))
            .children(&mut [
                html!("div", {
                    .class("form-box")
                    .children(&mut [
                        html!("h2", {
                            .text(form.mode.title())
                        }),
                        html!("form", {
                            .event_with_options(&EventOptions::preventable(), |e: events::KeyDown| {
                                if e.key() == "Enter" {
                                    e.prevent_default();
                                }
                            })
                            .children(&mut [
                                html!("input" => HtmlInputElement, {
                                    .class("form-input")
                                    .attr("type", "email")
                                    .attr("placeholder", "Email")
                                    .attr("required", "")
                                    .prop_signal("value", form.email.signal_cloned())
                                    .with_node!(input => {
                                        .event(clone!(form => move |_: events::Input| {
                                            form.email.set(input.value());
                                        }))
                                    })
                                }),
                                html!("input" => HtmlInputElement, {
                                    .class("form-input")
                                    .attr("type", "password")
                                    .attr("placeholder", "Password")
                                    .attr("required", "")
                                    .prop_signal("value", form.password.signal_cloned())
                                    .with_node!(input => {
                                        .event(clone!(form => move |_: events::Input| {
                                            form.password.set(input.value());
                                        }))
                                    })
                                }),
                                html!("button", {
                                    .class("form-button")
                                    .attr("type", "submit")
                                    .text(form.mode.title())
                                    .attr_signal("disabled", form.request.is_busy().map(|busy| busy.then_some("")))
                                    .event_with_options(&EventOptions::preventable(), clone!(form => move |e: events::Click| {
                                        e.prevent_default();
                                        Self::submit(form.clone());
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
