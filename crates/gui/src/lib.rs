//! genui GUI Library
//!
//! The graphical frontend of genui: one window with a labelled input per
//! parameter, a Run button and a Cancel button. Values typed into the form pass
//! the same validation dispatcher as the command line, and the window stays open
//! until every field is accepted or the user gives up.
//!
//! The window is single-shot. [`run_form`] blocks until it closes and then hands
//! back what was accepted, if anything. The windowing event loop exists once per
//! process, so a second form in the same process is refused with an error.

pub mod app;
pub mod dialogs;
pub mod form;
pub mod ui;

use std::any::Any;
use std::ffi::OsString;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError};

use genui_core::arguments::Collected;
use genui_core::config::InterfaceSettings;
use genui_core::error::{Error, Result};
use genui_core::parameter_list::ParameterList;
use iced::{Size, Task};
use log::{debug, info, warn};

use crate::app::{FormApp, ResultSlot};

const WINDOW_WIDTH: f32 = 560.0;
const FIELD_HEIGHT: f32 = 90.0;
const CHROME_HEIGHT: f32 = 180.0;
const MAX_WINDOW_HEIGHT: f32 = 800.0;

/// Environment variables naming a display server on X11 / Wayland systems.
pub const DISPLAY_VARIABLES: [&str; 3] = ["DISPLAY", "WAYLAND_DISPLAY", "WAYLAND_SOCKET"];

/// The windowing event loop can be created once per process.
static EVENT_LOOP_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Shows the form and blocks until it closes.
///
/// # Errors
///
/// Returns [`Error::GuiUnavailable`] when no window can be opened: without a
/// display, or when a form was already shown by this process. Returns
/// [`Error::Gui`] when the window fails after it started.
pub fn run_form(settings: &InterfaceSettings, parameters: &ParameterList) -> Result<Collected> {
    check_display(|name| std::env::var_os(name))?;
    claim_event_loop(&EVENT_LOOP_CLAIMED)?;

    let slot = ResultSlot::default();
    let state = FormApp::new(settings, parameters, Arc::clone(&slot));
    debug!("Opening form `{}` with {} field(s)", settings.title, parameters.len());

    let size = window_size(parameters.len());
    let run = panic::catch_unwind(AssertUnwindSafe(move || {
        iced::application(FormApp::title, FormApp::update, FormApp::view)
            .subscription(FormApp::subscription)
            .window_size(size)
            .centered()
            .run_with(move || (state, Task::none()))
    }));

    match run {
        Ok(result) => result.map_err(|e| Error::Gui(e.to_string()))?,
        Err(payload) => return Err(Error::GuiUnavailable(panic_message(payload.as_ref()))),
    }

    let submitted = slot
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take();

    Ok(match submitted {
        Some(arguments) => Collected::Submitted(arguments),
        None => {
            info!("Form closed without input");
            Collected::Dismissed
        }
    })
}

/// Fails when no display server is reachable.
///
/// Only X11 / Wayland systems are checked; other platforms always have a
/// desktop session to draw on.
///
/// # Errors
///
/// Returns [`Error::GuiUnavailable`] if none of [`DISPLAY_VARIABLES`] is set.
pub fn check_display<F>(lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<OsString>,
{
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return Ok(());
    }

    if DISPLAY_VARIABLES
        .iter()
        .any(|name| lookup(name).is_some_and(|value| !value.is_empty()))
    {
        return Ok(());
    }

    Err(Error::GuiUnavailable(format!(
        "no display found, none of {} is set",
        DISPLAY_VARIABLES.join(", ")
    )))
}

fn claim_event_loop(claimed: &AtomicBool) -> Result<()> {
    if claimed.swap(true, Ordering::SeqCst) {
        warn!("Form requested again in the same process");
        return Err(Error::GuiUnavailable(
            "the form can only be shown once per process".to_string(),
        ));
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "window could not be created".to_string())
}

fn window_size(fields: usize) -> Size {
    let height = CHROME_HEIGHT + FIELD_HEIGHT * fields as f32;
    Size::new(WINDOW_WIDTH, height.min(MAX_WINDOW_HEIGHT))
}
