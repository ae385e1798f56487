use iced::widget::{Column, Space, button, column, container, horizontal_space, pick_list, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Theme};

use stylepad_core::{FontSize, MenuCommand};

use crate::app::{App, Message, find_family};
use crate::theme::{colors, to_iced};

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let is_open = self.file_menu_open;

        let file_btn = button(text("File").size(13).color(colors::TEXT_PRIMARY))
            .padding(Padding::from([4, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_open {
                    colors::BG_HOVER
                } else {
                    match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => Color::TRANSPARENT,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 3.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleFileMenu);

        container(row![file_btn, horizontal_space()].align_y(Alignment::Center))
            .width(Length::Fill)
            .padding(Padding::from([2, 6]))
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

    pub fn menu_item<'a>(command: MenuCommand) -> Element<'a, Message> {
        button(
            row![
                text(command.label()).size(13).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(command.shortcut()).size(11).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 16]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(Message::Menu(command))
        .into()
    }

    pub fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_file_menu(&self) -> Element<'_, Message> {
        let mut items: Vec<Element<'_, Message>> = Vec::new();
        for command in MenuCommand::ALL {
            if command == MenuCommand::Exit {
                items.push(Self::menu_separator());
            }
            items.push(Self::menu_item(command));
        }

        let dropdown = container(Column::with_children(items).width(Length::Fixed(200.0)))
            .padding(Padding::from([4, 0]))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MODAL)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            });

        column![Space::with_height(30), row![Space::with_width(6), dropdown]].into()
    }

    pub fn view_style_bar(&self) -> Element<'_, Message> {
        let style = self.editor.style();
        let selected_family = find_family(&self.fonts, &style.family);

        let family_list = pick_list(self.fonts.as_slice(), selected_family, Message::FontSelected)
            .placeholder(style.family.clone())
            .text_size(13)
            .width(Length::Fixed(220.0));

        let size_list = pick_list(&FontSize::ALL[..], Some(style.size), Message::SizeSelected)
            .text_size(13)
            .width(Length::Fixed(70.0));

        let swatch_color = style.color.map(to_iced).unwrap_or(colors::TEXT_DEFAULT);
        let color_btn = button(
            row![
                container(Space::new(12, 12)).style(move |_| container::Style {
                    background: Some(Background::Color(swatch_color)),
                    border: Border {
                        color: colors::BORDER,
                        width: 1.0,
                        radius: 2.0.into(),
                    },
                    ..Default::default()
                }),
                text("Text Color").size(13),
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
        .padding(Padding::from([5, 10]))
        .on_press(Message::ShowColorPicker);

        container(
            row![
                text("Font:").size(13).color(colors::TEXT_SECONDARY),
                family_list,
                Space::with_width(8),
                text("Size:").size(13).color(colors::TEXT_SECONDARY),
                size_list,
                Space::with_width(8),
                color_btn,
            ]
            .spacing(6)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(10)
        .style(|_| container::Style {
            background: Some(Background::Color(colors::BG_STYLE_BAR)),
            ..Default::default()
        })
        .into()
    }
}
