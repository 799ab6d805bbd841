//! Page start-up: apply the saved theme, then wire the toggle control.

use leptos::prelude::*;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::app::ThemeApp;
use crate::config::ThemeConfig;
use crate::controller::{BrowserController, ThemePreferenceController};
use crate::error::{js_message, ThemeError};
use crate::store::open_browser_store;
use crate::theme::Theme;
use crate::view_state::DocumentMarkers;

/// Initialize the document theme and hook up the control.
///
/// The theme is applied before the control is looked up, so a missing
/// control still leaves the page in its saved theme.
pub fn start(config: ThemeConfig) -> Result<Theme, ThemeError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::WindowUnavailable)?;

    let view = DocumentMarkers::new(&document, config.marker_target)?;
    let controller = ThemePreferenceController::new(open_browser_store(), view, &config);
    let theme = controller.initialize();

    match config.mount_id {
        Some(mount_id) => mount_toggle(&document, &mount_id, controller, theme, config.control_id)?,
        None => attach_toggle(&document, &config.control_id, controller)?,
    }

    info!("Theme switch ready ({})", theme);
    Ok(theme)
}

/// Listen for clicks on an existing control in the host page.
fn attach_toggle(
    document: &Document,
    control_id: &str,
    controller: BrowserController,
) -> Result<(), ThemeError> {
    let control = document
        .get_element_by_id(control_id)
        .ok_or_else(|| ThemeError::MissingControl(control_id.to_string()))?;

    let callback = Closure::wrap(Box::new(move || {
        controller.toggle();
    }) as Box<dyn FnMut()>);

    control
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Document(js_message(&e)))?;
    callback.forget();
    Ok(())
}

/// Render the toggle button into a placeholder element.
fn mount_toggle(
    document: &Document,
    mount_id: &str,
    controller: BrowserController,
    initial: Theme,
    control_id: String,
) -> Result<(), ThemeError> {
    let container = document
        .get_element_by_id(mount_id)
        .ok_or_else(|| ThemeError::MissingControl(mount_id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ThemeError::Document(format!("#{} is not an HTML element", mount_id)))?;

    leptos::mount::mount_to(container, move || {
        view! { <ThemeApp controller=controller initial=initial control_id=control_id /> }
    })
    .forget();
    Ok(())
}
