//! Centered page container with a mode-dependent maximum width.

#[cfg(test)]
#[path = "content_wrapper_test.rs"]
mod content_wrapper_test;

use leptos::prelude::*;

pub const FORM_MAX_WIDTH: u32 = 768;
pub const PAGE_MAX_WIDTH: u32 = 1200;

/// Vertical placement of the wrapped content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Pin content below the fixed app bar.
    Top,
    #[default]
    Default,
}

pub fn outer_class(align: Align) -> &'static str {
    match align {
        Align::Top => "gm-content-outer top",
        Align::Default => "gm-content-outer",
    }
}

pub fn inner_max_width(form: bool) -> u32 {
    if form { FORM_MAX_WIDTH } else { PAGE_MAX_WIDTH }
}

fn inner_style(form: bool) -> String {
    format!("max-width: {}px;", inner_max_width(form))
}

/// Wraps `children` in an outer/inner container pair.
#[component]
pub fn ContentWrapper(
    #[prop(optional)] align: Align,
    #[prop(optional)] form: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=outer_class(align)>
            <div class="gm-content-inner" style=inner_style(form)>
                {children()}
            </div>
        </div>
    }
}
