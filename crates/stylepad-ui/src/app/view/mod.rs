pub mod dialogs;
pub mod editor;
pub mod toolbar;

use iced::{Background, Element, Length};
use iced::widget::{Space, column, container, mouse_area, opaque, stack};

use crate::app::{App, Message};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_style_bar(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if let Some(notice) = self.editor.notices().first() {
            stack![main_view, opaque(Self::backdrop()), self.view_notice_modal(notice)].into()
        } else if let Some(draft) = &self.color_draft {
            stack![
                main_view,
                opaque(mouse_area(Self::backdrop()).on_press(Message::ColorCancel)),
                self.view_color_modal(draft),
            ]
            .into()
        } else if self.file_menu_open {
            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseFileMenu),
                self.view_file_menu(),
            ]
            .into()
        } else {
            main_view
        }
    }

    /// Dimmed layer under a modal.
    fn backdrop<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BACKDROP)),
                ..Default::default()
            })
            .into()
    }
}
