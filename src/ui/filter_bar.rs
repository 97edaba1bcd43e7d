//! Category filter selector

use crate::app::AppState;
use crate::types::FilterSelection;
use dioxus::prelude::*;

#[component]
pub fn FilterBar() -> Element {
    let app_state = use_context::<AppState>();
    let categories = app_state.categories.read().clone();
    let selected = app_state.filter.read().as_str().to_string();

    let on_change = {
        let app_state = app_state.clone();
        move |evt: FormEvent| {
            let filter = FilterSelection::parse(&evt.value());
            let mut app_state = app_state.clone();
            spawn(async move {
                match app_state.book.set_filter(filter.clone()).await {
                    Ok(()) => {
                        app_state.filter.set(filter);
                        app_state.show_random().await;
                    }
                    Err(e) => tracing::warn!("Filter rejected: {}", e),
                }
            });
        }
    };

    rsx! {
        div {
            class: "filter-bar",
            label { r#for: "categoryFilter", "Category" }
            select {
                id: "categoryFilter",
                value: "{selected}",
                onchange: on_change,
                for category in categories {
                    option {
                        key: "{category}",
                        value: "{category}",
                        selected: category == selected,
                        if category == FilterSelection::ALL {
                            "All Categories"
                        } else {
                            "{category}"
                        }
                    }
                }
            }
        }
    }
}
