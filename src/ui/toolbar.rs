//! Sync, export and import controls

use std::path::PathBuf;

use crate::app::AppState;
use crate::storage::transfer::EXPORT_FILE_NAME;
use crate::sync::SyncOutcome;
use dioxus::prelude::*;

fn default_transfer_path() -> String {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.join(EXPORT_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME))
        .display()
        .to_string()
}

#[component]
pub fn SyncToolbar() -> Element {
    let app_state = use_context::<AppState>();
    let mut path = use_signal(default_transfer_path);
    let is_syncing = *app_state.is_syncing.read();

    let sync_now = {
        let app_state = app_state.clone();
        move |_: MouseEvent| {
            let mut app_state = app_state.clone();
            spawn(async move {
                app_state.is_syncing.set(true);
                if app_state.book.trigger_sync().await == SyncOutcome::Skipped {
                    tracing::debug!("Manual sync skipped, one is already running");
                }
                app_state.is_syncing.set(app_state.book.is_syncing());
            });
        }
    };

    let export = {
        let app_state = app_state.clone();
        move |_: MouseEvent| {
            let book = app_state.book.clone();
            let target = PathBuf::from(path());
            spawn(async move {
                if let Err(e) = book.export_to_file(&target).await {
                    tracing::debug!("Export to {} failed: {}", target.display(), e);
                }
            });
        }
    };

    let import = {
        let app_state = app_state.clone();
        move |_: MouseEvent| {
            let mut app_state = app_state.clone();
            let source = PathBuf::from(path());
            spawn(async move {
                match app_state.book.import_from_file(&source).await {
                    // Show the newest import; an empty document leaves the card as is
                    Ok(imported) => {
                        if let Some(last) = imported.last() {
                            app_state.current_quote.set(Some(last.clone()));
                        }
                    }
                    Err(e) => tracing::debug!("Import from {} failed: {}", source.display(), e),
                }
            });
        }
    };

    rsx! {
        section {
            class: "card toolbar",
            div {
                class: "toolbar-row",
                button {
                    class: "btn",
                    disabled: is_syncing,
                    onclick: sync_now,
                    if is_syncing { "Syncing..." } else { "Sync with Server" }
                }
            }
            div {
                class: "toolbar-row",
                input {
                    class: "path-input",
                    r#type: "text",
                    value: "{path}",
                    oninput: move |evt| path.set(evt.value()),
                }
                button { id: "exportBtn", class: "btn", onclick: export, "Export JSON" }
                button { id: "importBtn", class: "btn", onclick: import, "Import JSON" }
            }
        }
    }
}
