use std::rc::Rc;

use dominator::{Dom, clone, events, html, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use manga_store_client::{Loadable, Manga as MangaModel, detail, parse_score};
use web_sys::HtmlInputElement;

use crate::app::StoreApi;
use crate::common::Spinner;
use crate::request::RequestSlot;
use crate::utils::alert;

pub struct Manga {
    id: String,
    manga: Mutable<Loadable<MangaModel>>,
    score: Mutable<f64>,
    api: Rc<StoreApi>,
    request: RequestSlot,
    purchase_request: RequestSlot,
    rate_request: RequestSlot,
}

impl Manga {
    pub fn new(id: String, api: Rc<StoreApi>) -> Rc<Self> {
        Rc::new(Self {
            id,
            manga: Mutable::new(Loadable::Idle),
            score: Mutable::new(0.0),
            api,
            request: RequestSlot::new(),
            purchase_request: RequestSlot::new(),
            rate_request: RequestSlot::new(),
        })
    }

    fn fetch_detail(manga: Rc<Self>) {
        manga.manga.set(Loadable::Loading);
        manga.request.spawn(clone!(manga => async move {
            let result = manga.api.manga(&manga.id).await;
            if let Err(e) = &result {
                error!("error fetch manga {}: {}", manga.id, e);
            }
            manga.manga.set(result.into());
        }));
    }

    fn purchase(manga: Rc<Self>) {
        manga.purchase_request.spawn(clone!(manga => async move {
            alert(&detail::purchase(&manga.api, &manga.id).await);
        }));
    }

    fn rate(manga: Rc<Self>) {
        let score = manga.score.get();
        manga.rate_request.spawn(clone!(manga => async move {
            alert(&detail::rate(&manga.api, &manga.id, score).await);
        }));
    }

    fn render_detail(manga: Rc<Self>, detail: &MangaModel) -> Dom {
        html!("div", {
            .class("manga-detail")
            .children(&mut [
                html!("img", {
                    .class("manga-detail-image")
                    .attr("src", &detail.image_url)
                    .attr("alt", &detail.title)
                }),
                html!("h1", {
                    .class("manga-detail-title")
                    .text(&detail.title)
                }),
                html!("p", {
                    .class("manga-detail-price")
                    .text(&format!("Price: {}", detail.price_label()))
                }),
                html!("p", {
                    .class("manga-detail-description")
                    .text(&format!("Description: {}", detail.description))
                }),
                html!("p", {
                    .class("manga-detail-meta")
                    .text(&format!("Author: {}", detail.author))
                }),
                html!("p", {
                    .class("manga-detail-meta")
                    .text(&format!("Genres: {}", detail.genres_label()))
                }),
                html!("p", {
                    .class("manga-detail-meta")
                    .text(&format!("Rating: {}", detail.rating))
                }),
                html!("button", {
                    .class("manga-detail-button")
                    .text("Purchase")
                    .attr_signal("disabled", manga.purchase_request.is_busy().map(|busy| busy.then_some("")))
                    .event(clone!(manga => move |_: events::Click| {
                        Self::purchase(manga.clone());
                    }))
                }),
                html!("div", {
                    .class("rating-container")
                    .children(&mut [
                        html!("h3", {
                            .text("Rate this Manga")
                        }),
                        html!("input" => HtmlInputElement, {
                            .class("rating-input")
                            .attr("type", "number")
                            .attr("min", "0")
                            .attr("max", "5")
                            .prop_signal("value", manga.score.signal().map(|score| score.to_string()))
                            .with_node!(input => {
                                .event(clone!(manga => move |_: events::Input| {
                                    manga.score.set(parse_score(&input.value()));
                                }))
                            })
                        }),
                        html!("button", {
                            .class("manga-detail-button")
                            .text("Submit Rating")
                            .attr_signal("disabled", manga.rate_request.is_busy().map(|busy| busy.then_some("")))
                            .event(clone!(manga => move |_: events::Click| {
                                Self::rate(manga.clone());
                            }))
                        })
                    ])
                })
            ])
        })
    }

    pub fn render(manga: Rc<Self>) -> Dom {
        Self::fetch_detail(manga.clone());

        html!("div", {
            .class("main")
            .after_removed(clone!(manga => move |_| {
                manga.request.cancel();
                manga.purchase_request.cancel();
                manga.rate_request.cancel();
            }))
            .child_signal(manga.manga.signal_cloned().map(clone!(manga => move |state| match state {
                Loadable::Idle => None,
                Loadable::Loading => Some(Spinner::render()),
                Loadable::Ready(detail) => Some(Self::render_detail(manga.clone(), &detail)),
                Loadable::Failed(message) => Some(html!("div", {
                    .class("error-message")
                    .text(&format!("Error fetching manga details: {}", message))
                })),
            })))
        })
    }
}
