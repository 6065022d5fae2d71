use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use edupath::Platform;
use edupath::domain::config::WindowConfig;

const HEAD: &str = r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">
<script src="https://cdn.tailwindcss.com"></script>"#;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::from_config(&WindowConfig::default())
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &WindowConfig) -> Self {
        Self { title: config.title.clone(), width: config.width, height: config.height }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// The entry point for launching the app. `platform` becomes the root context.
    pub fn launch(self, platform: Platform, root: fn() -> Element) {
        tracing::info!(title = %self.title, width = self.width, height = self.height, "Launching desktop window");

        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(HEAD.into());

        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(platform.clone()))
            .launch(root);
    }
}
