//! Add-quote form

use crate::app::AppState;
use dioxus::prelude::*;

#[component]
pub fn AddQuoteForm() -> Element {
    let app_state = use_context::<AppState>();
    let mut text = use_signal(String::new);
    let mut category = use_signal(String::new);

    let can_add = !text().trim().is_empty() && !category().trim().is_empty();

    let submit = {
        let app_state = app_state.clone();
        move |_: MouseEvent| {
            let mut app_state = app_state.clone();
            let new_text = text();
            let new_category = category();
            spawn(async move {
                // Failures are reported through the book's notifications
                if let Ok(quote) = app_state.book.add_quote(&new_text, &new_category).await {
                    text.set(String::new());
                    category.set(String::new());
                    app_state.current_quote.set(Some(quote));
                }
            });
        }
    };

    rsx! {
        section {
            class: "card add-form",
            h2 { "Add a Quote" }
            input {
                id: "newQuoteText",
                r#type: "text",
                placeholder: "Enter a new quote",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
            }
            input {
                id: "newQuoteCategory",
                r#type: "text",
                placeholder: "Enter quote category",
                value: "{category}",
                oninput: move |evt| category.set(evt.value()),
            }
            button {
                id: "addQuoteBtn",
                class: if can_add { "btn btn-primary" } else { "btn btn-primary disabled" },
                onclick: submit,
                "Add Quote"
            }
        }
    }
}
