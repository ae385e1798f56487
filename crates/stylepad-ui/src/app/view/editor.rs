use iced::widget::{Space, container, horizontal_space, row, text, text_editor};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use crate::app::{App, Message};
use crate::theme::{colors, to_iced};

impl App {
    pub fn view_editor(&self) -> Element<'_, Message> {
        let style = self.editor.style();
        let value = style.color.map(to_iced).unwrap_or(colors::TEXT_DEFAULT);

        // Family, size and color apply to the whole surface, never a range.
        text_editor(self.editor.document().buffer().content())
            .height(Length::Fill)
            .padding(Padding::from([12, 16]))
            .font(self.buffer_font())
            .size(style.size.as_f32())
            .style(move |_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_EDITOR),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value,
                selection: colors::SELECTION,
            })
            .on_action(Message::EditorAction)
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let (line, col) = self.editor.document().buffer().cursor_position();
        let style = self.editor.style();
        let color_info = style
            .color
            .map(|c| c.hex())
            .unwrap_or_else(|| "default".to_string());

        let status_content = row![
            text(&self.status_message).size(12).color(colors::TEXT_SECONDARY),
            horizontal_space(),
            text(format!("Ln {}, Col {}", line + 1, col + 1))
                .size(12)
                .color(colors::TEXT_PRIMARY),
            Space::with_width(24),
            text(style.descriptor().to_string()).size(12).color(colors::ACCENT),
            Space::with_width(24),
            text(color_info).size(12).color(colors::TEXT_SECONDARY),
        ]
        .padding(Padding::from([4, 12]));

        container(status_content)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MENU)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}
