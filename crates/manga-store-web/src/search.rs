use std::rc::Rc;

use dominator::{Dom, clone, events, html, with_node};
use futures_signals::signal::{Mutable, SignalExt};
use manga_store_client::search::{SearchForm, SearchSequence, run as run_search};
use manga_store_client::{Loadable, Manga};
use web_sys::HtmlInputElement;

use crate::app::StoreApi;
use crate::common::Cover;
use crate::request::RequestSlot;

pub struct Search {
    form: Mutable<SearchForm>,
    genres_input: Mutable<String>,
    results: Mutable<Loadable<Vec<Manga>>>,
    sequence: SearchSequence,
    api: Rc<StoreApi>,
    request: RequestSlot,
}

impl Search {
    pub fn new(api: Rc<StoreApi>) -> Rc<Self> {
        Rc::new(Self {
            form: Mutable::new(SearchForm::default()),
            genres_input: Mutable::new("".to_string()),
            results: Mutable::new(Loadable::Idle),
            sequence: SearchSequence::default(),
            api,
            request: RequestSlot::new(),
        })
    }

    fn search(search: Rc<Self>) {
        let form = search.form.get_cloned();
        search.results.set(Loadable::Loading);
        search.request.spawn(clone!(search => async move {
            if let Some(results) = run_search(&search.api, &search.sequence, &form).await {
                search.results.set(results);
            }
        }));
    }

    fn render_field(label: &str, input: Dom) -> [Dom; 2] {
        [
            html!("label", {
                .text(label)
            }),
            input,
        ]
    }

    fn render_form(search: Rc<Self>) -> Dom {
        html!("div", {
            .class("search-form")
            .children(&mut Self::render_field("Query:", html!("input" => HtmlInputElement, {
                .attr("type", "text")
                .prop_signal("value", search.form.signal_ref(|form| form.query.clone()))
                .with_node!(input => {
                    .event(clone!(search => move |_: events::Input| {
                        search.form.lock_mut().query = input.value();
                    }))
                })
            })))
            .children(&mut Self::render_field("Genres (comma-separated):", html!("input" => HtmlInputElement, {
                .attr("type", "text")
                .prop_signal("value", search.genres_input.signal_cloned())
                .with_node!(input => {
                    .event(clone!(search => move |_: events::Input| {
                        let value = input.value();
                        let mut form = search.form.lock_mut();
                        form.set_genres(&value);
                        search.genres_input.set(form.genres_field());
                    }))
                })
            })))
            .children(&mut Self::render_field("Author:", html!("input" => HtmlInputElement, {
                .attr("type", "text")
                .prop_signal("value", search.form.signal_ref(|form| form.author.clone()))
                .with_node!(input => {
                    .event(clone!(search => move |_: events::Input| {
                        search.form.lock_mut().author = input.value();
                    }))
                })
            })))
            .children(&mut Self::render_field("Limit:", html!("input" => HtmlInputElement, {
                .attr("type", "number")
                .attr("min", "1")
                .prop_signal("value", search.form.signal_ref(|form| form.limit.to_string()))
                .with_node!(input => {
                    .event(clone!(search => move |_: events::Input| {
                        search.form.lock_mut().set_limit(&input.value());
                    }))
                })
            })))
            .children(&mut [
                html!("button", {
                    .class("search-button")
                    .text("Search")
                    .event(clone!(search => move |_: events::Click| {
                        Self::search(search.clone());
                    }))
                })
            ])
        })
    }

    pub fn render(search: Rc<Self>) -> Dom {
        html!("div", {
            .class("search-container")
            .after_removed(clone!(search => move |_| search.request.cancel()))
            .children(&mut [
                html!("h2", {
                    .text("Search Manga")
                }),
                Self::render_form(search.clone()),
            ])
            .child_signal(search.results.signal_cloned().map(|results| match results {
                Loadable::Loading => Some(html!("p", {
                    .class("results-message")
                    .text("Loading...")
                })),
                Loadable::Failed(message) => Some(html!("p", {
                    .class("results-message")
                    .text(&message)
                })),
                Loadable::Ready(results) => Some(html!("div", {
                    .class("results-container")
                    .apply(|dom| results.iter().fold(dom, |dom, manga| dom.child(Cover::new(manga).render())))
                })),
                Loadable::Idle => None,
            }))
        })
    }
}
