//! Shared drop handling for the grid background and individual cells.

#[cfg(test)]
#[path = "drop_test.rs"]
mod drop_test;

use leptos::prelude::*;
use wall::{LoadError, LoadReport, Wall};

use crate::state::notices::SignalNotifier;
use crate::state::ui::UiState;

/// Handle a drop on `target` (a cell index, or `None` for the wall background).
pub fn apply_drop(
    ev: &leptos::ev::DragEvent,
    target: Option<usize>,
    wall: RwSignal<Wall>,
    ui: RwSignal<UiState>,
    notifier: SignalNotifier,
) {
    ev.prevent_default();
    ev.stop_propagation();
    let drag_from = ui.try_update(UiState::end_drag).flatten();

    #[cfg(feature = "csr")]
    {
        use crate::state::ui::{DropAction, resolve_drop};
        use crate::util::files::{PickedFiles, revoke};

        let mut picked = PickedFiles::from_list(ev.data_transfer().and_then(|dt| dt.files()));
        match resolve_drop(drag_from, target, picked.len()) {
            DropAction::Swap { from, to } => {
                wall.update(|w| {
                    w.swap(from, to, &notifier);
                });
            }
            DropAction::LoadInto { index } => {
                let Some(meta) = picked.metas().into_iter().next() else {
                    return;
                };
                let replaced = wall.try_update(|w| w.load_into(index, meta, |m| picked.object_url(m), &notifier));
                if let Some(source) = replaced.flatten() {
                    revoke(&source.url);
                }
            }
            DropAction::LoadBatch => {
                let metas = picked.metas();
                if let Some(report) = wall.try_update(|w| w.load_files(metas, |m| picked.object_url(m), &notifier)) {
                    log_report("drop", &report);
                }
            }
            DropAction::Ignore => {}
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (drag_from, target, wall, notifier);
    }
}

/// Log a batch outcome, naming rejected files.
pub fn log_report(origin: &str, report: &LoadReport) {
    log::debug!("{origin} placed {} file(s)", report.placed.len());
    if !report.is_clean() {
        log::debug!("{origin} skipped {}", rejected_names(report));
    }
}

fn rejected_names(report: &LoadReport) -> String {
    report.rejected.iter().map(LoadError::file_name).collect::<Vec<_>>().join(", ")
}
