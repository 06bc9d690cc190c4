//! Option row: one tappable pokeball per catalog entry.

use gpui::{AnyElement, Context, FontWeight, SharedString, div, img, prelude::*, px, svg};
use starters_core::Glyph;

use crate::theme;
use crate::views::MainView;

/// Render every glyph in catalog order.
///
/// A click on glyph `i` calls back into [`MainView::on_glyph_tap`]; the row
/// itself never touches the selection.
pub fn render_option_row(glyphs: &[Glyph], cx: &mut Context<MainView>) -> AnyElement {
    div()
        .flex()
        .flex_row()
        .justify_center()
        .gap(px(theme::SPACE_2))
        .children(glyphs.iter().map(|glyph| {
            let index = glyph.index;
            div()
                .id(("option-glyph", index))
                .flex()
                .flex_col()
                .items_center()
                .p(px(theme::SPACE_2))
                .cursor_pointer()
                .on_click(cx.listener(move |view, _, _, cx| {
                    view.on_glyph_tap(index, cx);
                }))
                .child(render_glyph_image(glyph))
                .child(
                    div()
                        .text_size(px(theme::TEXT_GLYPH))
                        .font_weight(FontWeight::BOLD)
                        .child(glyph.label().to_string()),
                )
        }))
        .into_any_element()
}

fn render_glyph_image(glyph: &Glyph) -> AnyElement {
    let path = SharedString::from(glyph.image().as_str().to_string());
    if glyph.tinted {
        // svg() paints the shape with text_color
        svg()
            .path(path)
            .size(px(theme::GLYPH_IMAGE))
            .text_color(theme::glyph_tint())
            .into_any_element()
    } else {
        img(path).size(px(theme::GLYPH_IMAGE)).into_any_element()
    }
}
