use leptos::prelude::*;

use crate::theme::ThemeContext;

#[component]
pub fn ThemeToggle(
    /// Element id of the rendered button, e.g. "theme-toggle-button"
    #[prop(into)]
    control_id: String,
) -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();

    let on_click = move |_| {
        ctx.toggle();
    };
    let title = move || format!("Switch to {} theme", ctx.theme.get().opposite());

    view! {
        <button
            id=control_id
            type="button"
            class="theme-toggle"
            title=title
            aria-label=title
            on:click=on_click
        >
            {move || ctx.theme.get().icon()}
        </button>
    }
}
