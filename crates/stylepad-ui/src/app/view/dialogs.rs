use iced::widget::{Row, Space, button, column, container, row, slider, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Theme};

use stylepad_core::{Notice, Rgb};

use crate::app::{App, Channel, ColorDraft, Message};
use crate::theme::{colors, to_iced};

impl App {
    pub fn view_notice_modal<'a>(&'a self, notice: &'a Notice) -> Element<'a, Message> {
        let modal_content = column![
            text(notice.title).size(16).color(colors::ERROR),
            Space::with_height(12),
            text(notice.message).size(13).color(colors::TEXT_PRIMARY),
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                button(text("OK").size(13).color(Color::WHITE))
                    .padding(Padding::from([6, 24]))
                    .style(primary_button)
                    .on_press(Message::DismissNotice),
            ],
        ]
        .padding(24)
        .width(Length::Fixed(340.0));

        Self::modal_frame(modal_content.into())
    }

    pub fn view_color_modal<'a>(&'a self, draft: &'a ColorDraft) -> Element<'a, Message> {
        let preview_color = to_iced(draft.color);
        let preview = container(Space::new(Length::Fill, 36)).style(move |_| container::Style {
            background: Some(Background::Color(preview_color)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        });

        let mut channels = column![].spacing(8);
        for channel in Channel::ALL {
            let value = draft.get(channel);
            channels = channels.push(
                row![
                    text(channel.label()).size(13).width(Length::Fixed(16.0)),
                    slider(0..=255, value, move |v| Message::ColorChannelChanged(channel, v)),
                    text(value.to_string()).size(12).width(Length::Fixed(32.0)),
                ]
                .spacing(8)
                .align_y(Alignment::Center),
            );
        }

        let presets = Row::with_children(Rgb::PRESETS.iter().map(|&c| swatch(c, c == draft.color)))
            .spacing(6);

        let modal_content = column![
            text("Choose Text Color").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            preview,
            Space::with_height(4),
            text(draft.color.hex()).size(11).color(colors::TEXT_MUTED),
            Space::with_height(12),
            channels,
            Space::with_height(12),
            presets,
            Space::with_height(16),
            row![
                Space::with_width(Length::Fill),
                button(text("Cancel").size(13).color(colors::TEXT_PRIMARY))
                    .padding(Padding::from([6, 18]))
                    .style(secondary_button)
                    .on_press(Message::ColorCancel),
                Space::with_width(8),
                button(text("OK").size(13).color(Color::WHITE))
                    .padding(Padding::from([6, 24]))
                    .style(primary_button)
                    .on_press(Message::ColorConfirm),
            ],
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        Self::modal_frame(modal_content.into())
    }

    fn modal_frame(content: Element<'_, Message>) -> Element<'_, Message> {
        container(container(content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MODAL)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}

fn swatch<'a>(color: Rgb, selected: bool) -> Element<'a, Message> {
    let fill = to_iced(color);
    button(Space::new(22, 22))
        .padding(0)
        .style(move |_: &Theme, status: button::Status| {
            let edge = match status {
                _ if selected => colors::ACCENT,
                button::Status::Hovered => colors::TEXT_SECONDARY,
                _ => colors::BORDER,
            };
            button::Style {
                background: Some(Background::Color(fill)),
                border: Border {
                    color: edge,
                    width: 2.0,
                    radius: 3.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(Message::ColorPresetPicked(color))
        .into()
}

fn primary_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => Color::from_rgb(0.30, 0.34, 0.78),
        _ => colors::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn secondary_button(_: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::BG_HOVER,
        _ => colors::BG_MENU,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
