//! Failure notices for actions that have no page of their own to report
//! on, such as login or logout.

use std::rc::Rc;

use dominator::{Dom, clone, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use manga_store_client::{Error, Route};

use super::{current_route, route_signal};

thread_local! {
    static NOTICE: Rc<Notice> = Notice::new();
}

/// Report a failed action, e.g. `show_error("Login", &e)` shows
/// "Login failed: Invalid email or password".
pub fn show_error(action: &str, error: &Error) {
    error!("{} failed: {}", action, error);
    NOTICE.with(|notice| notice.show(current_route(), action, error));
}

pub fn render() -> Dom {
    NOTICE.with(|notice| Notice::render(notice.clone()))
}

struct Notice {
    /// Route the notice was raised on, and its text
    message: Mutable<Option<(Route, String)>>,
}

impl Notice {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            message: Mutable::new(None),
        })
    }

    fn show(&self, route: Route, action: &str, error: &Error) {
        self.message
            .set(Some((route, format!("{} failed: {}", action, error))));
    }

    /// A notice belongs to the page it was raised on
    fn on_route(&self, route: &Route) {
        let mut message = self.message.lock_mut();
        if message.as_ref().is_some_and(|(shown_on, _)| shown_on != route) {
            *message = None;
        }
    }

    fn text(&self) -> Option<String> {
        self.message.lock_ref().as_ref().map(|(_, text)| text.clone())
    }

    fn render(notice: Rc<Self>) -> Dom {
        html!("div", {
            .class("snackbar")
            .future(route_signal().for_each(clone!(notice => move |route| {
                notice.on_route(&route);
                async {}
            })))
            .visible_signal(notice.message.signal_ref(|message| message.is_some()))
            .child_signal(notice.message.signal_ref(|message| message.as_ref().map(|(_, text)| html!("span", {
                .class("snackbar-message")
                .text(text)
            }))))
            .children(&mut [
                html!("button", {
                    .class("snackbar-dismiss")
                    .text("Dismiss")
                    .event(clone!(notice => move |_: events::Click| notice.message.set(None)))
                })
            ])
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_show_server_message() {
        let notice = Notice::new();
        notice.show(
            Route::Login,
            "Login",
            &Error::Server {
                status: 401,
                message: "Invalid email or password".to_string(),
            },
        );

        assert_eq!(
            notice.text().as_deref(),
            Some("Login failed: Invalid email or password")
        );
    }

    #[test]
    fn test_cleared_when_leaving_page() {
        let notice = Notice::new();
        notice.show(
            Route::Register,
            "Register",
            &Error::Transport("Network Error".to_string()),
        );

        notice.on_route(&Route::Register);
        assert_eq!(
            notice.text().as_deref(),
            Some("Register failed: Network Error")
        );

        notice.on_route(&Route::Home);
        assert_eq!(notice.text(), None);
    }

    #[test]
    fn test_logout_notice_survives_redirect() {
        let notice = Notice::new();
        // logout navigates to /login before reporting
        notice.show(
            Route::Login,
            "Logout",
            &Error::Transport("Network Error".to_string()),
        );

        notice.on_route(&Route::Login);
        assert!(notice.text().is_some());
    }
}
