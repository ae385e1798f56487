use iced::{Font, Subscription, Task, keyboard};
use iced::font::{Style as FontStyle, Weight};

use stylepad_core::{Editor, FontCatalog};

pub mod file_ops;
pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

pub struct App {
    /// Document, current file and style
    pub editor: Editor<Surface>,
    /// Installed font families for the family selector
    pub fonts: Vec<&'static str>,
    pub status_message: String,
    pub file_menu_open: bool,
    pub color_draft: Option<ColorDraft>,
    /// A native file dialog is open
    pub prompt_pending: bool,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let catalog = FontCatalog::system();

        let mut style = flags.config.initial_style();
        style.family = catalog.resolve(&style.family);

        let mut app = Self {
            editor: Editor::new(Surface::new(), style),
            fonts: leak_families(&catalog),
            status_message: "Ready | Ctrl+O: Open | Ctrl+S: Save | Ctrl+N: New".to_string(),
            file_menu_open: false,
            color_draft: None,
            prompt_pending: false,
        };

        if let Some(path) = flags.file {
            app.finish_open(Some(path));
        }

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.editor.title()
    }

    /// Font the whole buffer is rendered with.
    pub fn buffer_font(&self) -> Font {
        match find_family(&self.fonts, &self.editor.style().family) {
            Some(name) => Font {
                weight: Weight::Normal,
                style: FontStyle::Normal,
                ..Font::with_name(name)
            },
            None => Font::DEFAULT,
        }
    }

    /// True while a modal owns the window.
    pub fn is_blocked(&self) -> bool {
        self.color_draft.is_some() || !self.editor.notices().is_empty()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }
}

/// Turns the catalog into the `&'static str` names iced fonts need.
///
/// Runs once at startup; the names live for the whole session.
fn leak_families(catalog: &FontCatalog) -> Vec<&'static str> {
    catalog
        .families()
        .iter()
        .map(|name| &*Box::leak(name.clone().into_boxed_str()))
        .collect()
}

pub fn find_family(fonts: &[&'static str], family: &str) -> Option<&'static str> {
    fonts.iter().copied().find(|name| *name == family)
}

pub fn run(flags: Flags) -> iced::Result {
    let size = iced::Size::new(flags.config.window.width, flags.config.window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(size)
        .theme(|_| iced::Theme::Light)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_family() {
        let fonts = vec!["Arial", "DejaVu Sans"];
        assert_eq!(find_family(&fonts, "DejaVu Sans"), Some("DejaVu Sans"));
        assert_eq!(find_family(&fonts, "Sans Serif"), None);
    }

    #[test]
    fn test_leak_families_keeps_order() {
        let catalog = FontCatalog::from_families(["Zapf", "Arial"]);
        assert_eq!(leak_families(&catalog), vec!["Arial", "Zapf"]);
    }
}
