use std::rc::Rc;

use dominator::{Dom, clone, events, html};
use futures_signals::signal::{Mutable, SignalExt};
use manga_store_client::profile::{ProfileData, fetch_profile, open_manga};
use manga_store_client::{Loadable, PurchaseDetail};

use crate::app::StoreApi;
use crate::common::{Router, Spinner};
use crate::request::RequestSlot;

pub struct Profile {
    api: Rc<StoreApi>,
    profile: Mutable<Loadable<ProfileData>>,
    request: RequestSlot,
}

impl Profile {
    pub fn new(api: Rc<StoreApi>) -> Rc<Self> {
        Rc::new(Self {
            api,
            profile: Mutable::new(Loadable::Idle),
            request: RequestSlot::new(),
        })
    }

    fn fetch_profile(profile: Rc<Self>) {
        profile.profile.set(Loadable::Loading);
        profile.request.spawn(clone!(profile => async move {
            let result = fetch_profile(&profile.api).await;
            if let Err(e) = &result {
                error!("error fetch profile: {}", e);
            }
            profile.profile.set(result.into());
        }));
    }

    fn render_purchase(purchase: &PurchaseDetail) -> Dom {
        let on_click = open_manga(Rc::new(Router), &purchase.manga_id);

        html!("div", {
            .class("purchase-card")
            .event(move |_: events::Click| on_click())
            .children(&mut [
                html!("img", {
                    .class("manga-image")
                    .attr("src", &purchase.image_url)
                    .attr("alt", &purchase.title)
                }),
                html!("div", {
                    .class("card-content")
                    .children(&mut [
                        html!("h3", {
                            .class("manga-title")
                            .text(&purchase.title)
                        }),
                        html!("p", {
                            .text(&format!("Price: ${}", purchase.price))
                        }),
                        html!("p", {
                            .text(&format!("Purchased on: {}", purchase.purchase_date))
                        }),
                    ])
                })
            ])
        })
    }

    fn render_profile(data: &ProfileData) -> Dom {
        html!("div", {
            .class("profile-container")
            .children(&mut [
                html!("h1", {
                    .text("User Profile")
                }),
                html!("div", {
                    .class("user-info")
                    .children(&mut [
                        html!("p", {
                            .children(&mut [
                                html!("strong", {
                                    .text("Email:")
                                })
                            ])
                            .text(&format!(" {}", data.user.email))
                        })
                    ])
                }),
                html!("h2", {
                    .text("Purchase History")
                }),
                html!("div", {
                    .class("purchase-history")
                    .apply(|dom| if data.purchases.is_empty() {
                        dom.children(&mut [
                            html!("p", {
                                .text("No purchases found.")
                            })
                        ])
                    } else {
                        data.purchases.iter().fold(dom, |dom, purchase| dom.child(Self::render_purchase(purchase)))
                    })
                })
            ])
        })
    }

    pub fn render(profile: Rc<Self>) -> Dom {
        Self::fetch_profile(profile.clone());

        html!("div", {
            .class("main")
            .after_removed(clone!(profile => move |_| profile.request.cancel()))
            .child_signal(profile.profile.signal_cloned().map(|state| match state {
                Loadable::Idle => None,
                Loadable::Loading => Some(Spinner::render()),
                Loadable::Ready(data) => Some(Self::render_profile(&data)),
                Loadable::Failed(message) => Some(html!("div", {
                    .class("error-message")
                    .text(&format!("Error: {}", message))
                })),
            }))
        })
    }
}
