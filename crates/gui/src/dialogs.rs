//! Native file and directory pickers.

use std::path::{Path, PathBuf};

use genui_core::config::expand_path;
use genui_core::parameter::Widget;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    File,
    Dir,
}

impl Picker {
    pub fn button_label(self, single: bool) -> &'static str {
        match (self, single) {
            (_, true) => "Browse...",
            (Self::File, false) => "File...",
            (Self::Dir, false) => "Dir...",
        }
    }
}

/// Pickers offered next to a field with the given widget.
pub fn pickers(widget: Widget) -> &'static [Picker] {
    match widget {
        Widget::File => &[Picker::File],
        Widget::Dir => &[Picker::Dir],
        Widget::FileOrDir => &[Picker::File, Picker::Dir],
        Widget::Text | Widget::Password | Widget::Checkbox => &[],
    }
}

/// Opens a native picker without blocking the window, starting in `start` when
/// given.
///
/// Resolves to `None` when the user closes the dialog without a choice.
pub async fn pick(picker: Picker, start: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new();
    if let Some(directory) = start {
        dialog = dialog.set_directory(directory);
    }

    let picked = match picker {
        Picker::File => dialog.pick_file().await,
        Picker::Dir => dialog.pick_folder().await,
    }
    .map(|handle| handle.path().to_path_buf());

    debug!("{picker:?} picker returned {picked:?}");
    picked
}

/// The directory a picker opens in for the current field text.
pub fn start_directory(current: &str) -> Option<PathBuf> {
    let current = current.trim();
    if current.is_empty() {
        return None;
    }

    let path = PathBuf::from(expand_path(current));
    if path.is_dir() {
        return Some(path);
    }

    path.parent()
        .filter(|parent| parent.is_dir())
        .map(Path::to_path_buf)
}
