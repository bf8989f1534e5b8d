use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;
use crate::domains::ui::view_models::header_action_label;
use crate::domains::users::UsersMessage;
use crate::state::State;

pub fn view_header(state: &State) -> Element<'_, DomainMessage> {
    let mode = &state.domains.users.state.mode;

    let action_style = if mode.is_listing() {
        theme::Button::Primary
    } else {
        theme::Button::Secondary
    };

    let content = row![
        text("User Management")
            .size(22)
            .color(theme::RosterTheme::TEXT_PRIMARY)
            .width(Length::Fill),
        text(&*state.server_url)
            .size(12)
            .color(theme::RosterTheme::TEXT_SUBDUED),
        button(text(header_action_label(mode)).size(14))
            .style(action_style.style())
            .padding([8, 14])
            .on_press(UsersMessage::ToggleAddMode.into()),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(content)
        .style(theme::Container::Header.style())
        .padding([14, 20])
        .width(Length::Fill)
        .into()
}
