use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::controller::BrowserController;
use crate::theme::{Theme, ThemeContext};

/// Root of the mounted toggle. `initial` is the theme the controller
/// already applied during start-up.
#[component]
pub fn ThemeApp(
    controller: BrowserController,
    initial: Theme,
    #[prop(into)] control_id: String,
) -> impl IntoView {
    let (theme, set_theme) = signal(initial);
    let controller = StoredValue::new_local(controller);
    provide_context(ThemeContext {
        theme,
        set_theme,
        controller,
    });

    view! { <ThemeToggle control_id=control_id /> }
}
