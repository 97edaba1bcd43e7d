//! UI components for QuoteDeck
//!
//! This module contains all user interface components built with Dioxus.

#![allow(non_snake_case)]

pub mod add_form;
pub mod filter_bar;
pub mod notifications;
pub mod quote_display;
pub mod toolbar;

use crate::app::AppState;
use crate::storage::settings::save_settings;
use crate::ui::add_form::AddQuoteForm;
use crate::ui::filter_bar::FilterBar;
use crate::ui::notifications::NotificationTray;
use crate::ui::quote_display::QuoteDisplay;
use crate::ui::toolbar::SyncToolbar;
use dioxus::prelude::*;

const STYLES: &str = include_str!("../../assets/quotedeck.css");

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let theme = app_state.settings.read().theme.clone();
    let count = *app_state.quote_count.read();
    let mut app_state_theme = app_state.clone();

    rsx! {
        style { "{STYLES}" }
        div {
            class: "app theme-{theme}",

            header {
                class: "app-header",
                h1 { "Dynamic Quote Generator" }
                div {
                    class: "header-meta",
                    span { class: "quote-count", "{count} quotes" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_: MouseEvent| {
                            let mut settings = app_state_theme.settings.write();
                            settings.toggle_theme();
                            if let Err(error) = save_settings(&settings) {
                                tracing::error!("Failed to save settings: {}", error);
                            }
                        },
                        if theme == "light" { "Dark theme" } else { "Light theme" }
                    }
                }
            }

            main {
                class: "app-main",
                FilterBar {}
                QuoteDisplay {}
                AddQuoteForm {}
                SyncToolbar {}
            }

            NotificationTray {}
        }
    }
}
