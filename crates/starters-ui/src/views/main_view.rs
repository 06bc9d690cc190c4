//! Main view for starters-ui.
//!
//! Root view that owns the starter screen, samples orientation and appearance
//! from the window on every render, and lays out the resulting frame.

use gpui::{
    AnyElement, Context, IntoElement, Render, Subscription, Window, WindowAppearance, div,
    prelude::*, px,
};
use starters_core::{
    Appearance, AppearanceMode, Arrangement, Command, Orientation, ScreenFrame, ScreenStrings,
    Slot, StarterScreen, StartersError, Store,
};

use crate::theme;
use crate::views::{detail_card, header, option_row};

/// Main application view.
///
/// Owns the `StarterScreen` (and with it the selection) for the window's
/// lifetime. Glyph taps come back here and are dispatched to the screen.
pub struct MainView {
    screen: StarterScreen,
    strings: ScreenStrings,
    appearance_mode: AppearanceMode,
    /// Re-renders when the system switches between light and dark.
    _appearance_subscription: Subscription,
}

impl MainView {
    pub fn new(
        screen: StarterScreen,
        strings: ScreenStrings,
        appearance_mode: AppearanceMode,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let appearance_subscription =
            cx.observe_window_appearance(window, |_view, window, cx| {
                tracing::debug!(
                    event = "ui.appearance.changed",
                    appearance = ?window.appearance()
                );
                cx.notify();
            });

        Self {
            screen,
            strings,
            appearance_mode,
            _appearance_subscription: appearance_subscription,
        }
    }

    /// Handle a tap on the option glyph at `index`.
    pub fn on_glyph_tap(&mut self, index: usize, cx: &mut Context<Self>) {
        tracing::info!(event = "ui.glyph.tapped", index = index);

        match self.screen.dispatch(Command::TapGlyph { index }) {
            Ok(events) => {
                tracing::debug!(
                    event = "ui.glyph_tap.dispatched",
                    events = events.len(),
                    selected = self.screen.current().name()
                );
                cx.notify();
            }
            Err(e) => {
                tracing::warn!(
                    event = "ui.glyph_tap.failed",
                    index = index,
                    error = %e,
                    code = e.error_code()
                );
            }
        }
    }

    fn frame(&self, window: &Window) -> ScreenFrame {
        let viewport = window.viewport_size();
        let orientation =
            Orientation::from_viewport(f32::from(viewport.width), f32::from(viewport.height));
        let appearance = self
            .appearance_mode
            .resolve(host_appearance(window.appearance()));
        self.screen.frame(orientation, appearance, &self.strings)
    }
}

fn host_appearance(appearance: WindowAppearance) -> Appearance {
    match appearance {
        WindowAppearance::Dark | WindowAppearance::VibrantDark => Appearance::Dark,
        WindowAppearance::Light | WindowAppearance::VibrantLight => Appearance::Light,
    }
}

/// Render one slot of the frame.
fn render_slot(slot: Slot, frame: &ScreenFrame, cx: &mut Context<MainView>) -> AnyElement {
    match slot {
        Slot::Logo => header::render_logo(&frame.logo),
        Slot::Header => header::render_header(&frame.header),
        Slot::Spacer => div().flex_1().into_any_element(),
        Slot::Gap => div().h(px(theme::SPACE_8)).into_any_element(),
        Slot::DetailCard => detail_card::render_detail_card(&frame.card),
        Slot::OptionRow => option_row::render_option_row(&frame.glyphs, cx),
    }
}

/// Render a list of slots as a centered column.
fn render_column(
    slots: &[Slot],
    frame: &ScreenFrame,
    cx: &mut Context<MainView>,
) -> gpui::Div {
    let mut column = div().flex().flex_col().items_center();
    for slot in slots {
        column = column.child(render_slot(*slot, frame, cx));
    }
    column
}

impl Render for MainView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let frame = self.frame(window);

        let body = match frame.arrangement {
            // Portrait: one column, slots spaced evenly, spacers absorb the rest
            Arrangement::Column { slots } => render_column(slots, &frame, cx)
                .size_full()
                .gap(px(theme::SPACE_4))
                .into_any_element(),
            // Landscape: two equal halves, vertically centered
            Arrangement::Split { left, right } => div()
                .size_full()
                .flex()
                .flex_row()
                .items_center()
                .gap(px(theme::SPACE_4))
                .child(
                    render_column(left, &frame, cx)
                        .flex_1()
                        .justify_center(),
                )
                .child(
                    render_column(right, &frame, cx)
                        .flex_1()
                        .justify_center(),
                )
                .into_any_element(),
        };

        div()
            .size_full()
            .p(px(theme::SPACE_4))
            .bg(theme::background(frame.appearance))
            .text_color(theme::text(frame.appearance))
            .child(body)
    }
}
