//! Toast notification overlay view
//!
//! Renders toast notifications in the top-right corner of the screen.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::{FeedbackMessage, Toast, ToastLevel};
use crate::domains::ui::theme::{self, RosterTheme};
use crate::state::State;

pub fn view_toast_overlay(state: &State) -> Element<'_, DomainMessage> {
    let toasts = &state.domains.ui.state.toast_manager.toasts;

    let toast_column = column(toasts.iter().map(view_single_toast))
        .spacing(8)
        .width(Length::Shrink);

    // Top padding clears the header
    container(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 70.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        })
        .align_x(Alignment::End)
        .align_y(Alignment::Start)
        .into()
}

fn view_single_toast(toast: &Toast) -> Element<'_, DomainMessage> {
    let (bg_color, border_color) = match toast.level {
        ToastLevel::Success => {
            (iced::Color::from_rgb(0.1, 0.3, 0.1), RosterTheme::SUCCESS)
        }
        ToastLevel::Warning => {
            (iced::Color::from_rgb(0.3, 0.25, 0.1), RosterTheme::WARNING)
        }
        ToastLevel::Error => {
            (iced::Color::from_rgb(0.3, 0.1, 0.1), RosterTheme::ERROR)
        }
    };

    let dismiss_btn = button(text("x").size(13))
        .padding([2, 6])
        .style(theme::Button::Text.style())
        .on_press(FeedbackMessage::DismissToast(toast.id).into());

    let content = row![
        text(toast.message.as_str())
            .size(13)
            .color(RosterTheme::TEXT_PRIMARY),
        dismiss_btn,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding(Padding::new(10.0).right(14.0).left(14.0))
        .max_width(360.0)
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(bg_color)),
            border: iced::Border {
                color: border_color,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
