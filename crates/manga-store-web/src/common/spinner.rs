use dominator::{Dom, html};

pub struct Spinner;

impl Spinner {
    pub fn render() -> Dom {
        html!("div", {
            .class("loading-message")
            .children(&mut [
                html!("div", {
                    .class("loader")
                }),
                html!("span", {
                    .text("Loading...")
                })
            ])
        })
    }
}
