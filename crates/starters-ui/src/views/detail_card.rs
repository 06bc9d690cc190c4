//! Detail card for the selected starter.

use gpui::{AnyElement, FontWeight, SharedString, div, img, prelude::*, px};
use starters_core::DetailCard;

use crate::theme;

/// Render the selected starter's image and uppercase name.
pub fn render_detail_card(card: &DetailCard) -> AnyElement {
    div()
        .flex()
        .flex_col()
        .items_center()
        .child(
            img(SharedString::from(card.image.as_str().to_string()))
                .size(px(theme::CARD_IMAGE)),
        )
        .child(
            div()
                .text_size(px(theme::TEXT_CARD))
                .font_weight(FontWeight::BOLD)
                .child(card.title.clone()),
        )
        .into_any_element()
}
