use gpui::{AnyElement, FontWeight, SharedString, div, img, prelude::*, px};
use starters_core::{Header, Logo};

use crate::theme;

/// Render the screen title, centered across the full width.
pub fn render_header(header: &Header) -> AnyElement {
    div()
        .w_full()
        .text_center()
        .text_size(px(theme::TEXT_HEADER))
        .font_weight(FontWeight::BOLD)
        .child(header.title.clone())
        .into_any_element()
}

/// Render the logo at full width and fixed height.
pub fn render_logo(logo: &Logo) -> AnyElement {
    img(SharedString::from(logo.image.as_str().to_string()))
        .w_full()
        .h(px(theme::LOGO_HEIGHT))
        .into_any_element()
}
