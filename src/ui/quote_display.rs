//! Quote display card

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn QuoteDisplay() -> Element {
    let app_state = use_context::<AppState>();
    let current = app_state.current_quote.read().clone();

    let show_new = {
        let app_state = app_state.clone();
        move |_: MouseEvent| {
            let app_state = app_state.clone();
            spawn(async move {
                app_state.show_random().await;
            });
        }
    };

    rsx! {
        section {
            class: "card quote-card",

            match current {
                Some(quote) => rsx! {
                    p { class: "quote-text", "“{quote.text}”" }
                    p { class: "quote-category", "{quote.category}" }
                },
                None => rsx! {
                    p {
                        class: "quote-empty",
                        "No quotes available for this category. Add one below!"
                    }
                },
            }

            button {
                class: "btn btn-primary",
                onclick: show_new,
                "Show New Quote"
            }
        }
    }
}
