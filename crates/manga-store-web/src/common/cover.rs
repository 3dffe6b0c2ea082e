use dominator::{Dom, DomBuilder, html, link};
use manga_store_client::{Manga, Route};
use web_sys::HtmlElement;

/// A manga card: image, title and price
pub struct Cover<'a> {
    manga: &'a Manga,
}

impl<'a> Cover<'a> {
    pub fn new(manga: &'a Manga) -> Self {
        Self { manga }
    }

    pub fn link(&self) -> String {
        Route::Manga(self.manga.id.clone()).url()
    }

    fn content(&self, dom: DomBuilder<HtmlElement>) -> DomBuilder<HtmlElement> {
        dom.class("manga-item").children(&mut [
            html!("img", {
                .class("manga-image")
                .attr("src", &self.manga.image_url)
                .attr("alt", &self.manga.title)
                .attr("loading", "lazy")
            }),
            html!("h3", {
                .class("manga-title")
                .text(&self.manga.title)
            }),
            html!("p", {
                .text(&format!("Price: {}", self.manga.price_label()))
            }),
        ])
    }

    /// Card that opens the manga detail page when clicked
    pub fn render_link(&self) -> Dom {
        link!(self.link(), {
            .apply(|dom| self.content(dom))
        })
    }

    pub fn render(&self) -> Dom {
        html!("div", {
            .apply(|dom| self.content(dom))
        })
    }
}
