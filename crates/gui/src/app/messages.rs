use std::path::PathBuf;

use crate::dialogs::Picker;

/// Events of the form window. Fields are addressed by their position in the
/// parameter list.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(usize, String),
    FlagToggled(usize, bool),
    Browse(usize, Picker),
    Picked(usize, Option<PathBuf>),
    Submit,
    Cancel,
}
