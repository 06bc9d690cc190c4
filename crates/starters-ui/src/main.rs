//! starters-ui: pick a starter creature
//!
//! GPUI-based screen showing the selected starter and a row of options.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};
use starters_core::{StarterScreen, StartersConfig, StartersError, init_logging};

mod assets;
mod theme;
mod views;

use assets::StarterAssets;
use views::MainView;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(false);

    let config = StartersConfig::load_hierarchy().inspect_err(|e| {
        tracing::error!(
            event = "ui.startup.config_failed",
            error = %e,
            code = e.error_code()
        );
    })?;

    // An empty catalog leaves nothing to select: refuse to start
    let catalog = config.catalog().inspect_err(|e| {
        tracing::error!(
            event = "ui.startup.catalog_failed",
            error = %e,
            code = e.error_code()
        );
    })?;

    let screen = StarterScreen::new(catalog);
    let strings = config.strings();
    let appearance_mode = config.appearance.mode();
    let (width, height) = (config.window.width(), config.window.height());

    Application::new()
        .with_assets(StarterAssets::new(config.assets.dir.clone()))
        .run(move |cx: &mut App| {
            let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some(SharedString::from("Starters")),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    cx.new(|cx| MainView::new(screen, strings, appearance_mode, window, cx))
                },
            )
            .expect("Failed to open window");
            cx.activate(true);
        });

    Ok(())
}
