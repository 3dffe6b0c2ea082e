use std::rc::Rc;

use dominator::{Dom, clone, html};
use futures_signals::signal::{Mutable, SignalExt};
use manga_store_client::home::{HomeFeed, fetch_feed};
use manga_store_client::Loadable;

use crate::app::StoreApi;
use crate::common::{Cover, Spinner};
use crate::request::RequestSlot;

pub struct Home {
    api: Rc<StoreApi>,
    feed: Mutable<Loadable<HomeFeed>>,
    request: RequestSlot,
}

impl Home {
    pub fn new(api: Rc<StoreApi>) -> Rc<Self> {
        Rc::new(Self {
            api,
            feed: Mutable::new(Loadable::Idle),
            request: RequestSlot::new(),
        })
    }

    fn fetch_feed(home: Rc<Self>) {
        home.feed.set(Loadable::Loading);
        home.request.spawn(clone!(home => async move {
            let result = fetch_feed(&home.api).await;
            if let Err(e) = &result {
                error!("error fetch home feed: {}", e);
            }
            home.feed.set(result.into());
        }));
    }

    fn render_feed(feed: &HomeFeed) -> Dom {
        html!("div", {
            .class("home-container")
            .children(&mut [
                html!("h1", {
                    .text("Welcome to the Manga Store")
                })
            ])
            .apply(|dom| feed.sections().into_iter().fold(dom, |dom, section| dom.child(html!("div", {
                .class("manga-section")
                .children(&mut [
                    html!("h2", {
                        .text(section.title)
                    }),
                    html!("div", {
                        .class("manga-row")
                        .apply(|dom| section.manga.iter().fold(dom, |dom, manga| dom.child(Cover::new(manga).render_link())))
                    })
                ])
            }))))
        })
    }

    pub fn render(home: Rc<Self>) -> Dom {
        Self::fetch_feed(home.clone());

        html!("div", {
            .class("main")
            .after_removed(clone!(home => move |_| home.request.cancel()))
            .child_signal(home.feed.signal_cloned().map(|feed| match feed {
                Loadable::Idle => None,
                Loadable::Loading => Some(Spinner::render()),
                Loadable::Ready(feed) => Some(Self::render_feed(&feed)),
                Loadable::Failed(message) => Some(html!("div", {
                    .class("error-message")
                    .text(&format!("Error fetching data: {}", message))
                })),
            }))
        })
    }
}
