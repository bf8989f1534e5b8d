use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};
use roster_model::Role;

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;
use crate::domains::ui::view_models::{form_title, submit_label};
use crate::domains::users::{FormMode, UsersMessage};
use crate::state::State;

pub fn view_user_form<'a>(
    state: &'a State,
    mode: &'a FormMode,
) -> Element<'a, DomainMessage> {
    let form = &state.domains.users.state.form;

    let full_name = column![
        text("Full Name")
            .size(13)
            .color(theme::RosterTheme::TEXT_SECONDARY),
        text_input("Full name", &form.full_name)
            .on_input(|value| UsersMessage::FullNameChanged(value).into())
            .on_submit(UsersMessage::SubmitForm.into())
            .padding(10)
            .style(theme::text_input_style),
    ]
    .spacing(6);

    let user_name = column![
        text("User Name")
            .size(13)
            .color(theme::RosterTheme::TEXT_SECONDARY),
        text_input("User name", &form.user_name)
            .on_input(|value| UsersMessage::UserNameChanged(value).into())
            .on_submit(UsersMessage::SubmitForm.into())
            .padding(10)
            .style(theme::text_input_style),
    ]
    .spacing(6);

    let role = column![
        text("Role")
            .size(13)
            .color(theme::RosterTheme::TEXT_SECONDARY),
        pick_list(Role::ALL, form.role, |role| {
            UsersMessage::RoleSelected(role).into()
        })
        .placeholder("Select a role")
        .padding(10)
        .width(Length::Fill),
    ]
    .spacing(6);

    let actions = row![
        button(text(submit_label(mode)).size(14))
            .style(theme::Button::Primary.style())
            .padding([8, 18])
            .on_press(UsersMessage::SubmitForm.into()),
        button(text("Cancel").size(14))
            .style(theme::Button::Secondary.style())
            .padding([8, 18])
            .on_press(UsersMessage::ToggleAddMode.into()),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let content = column![
        text(form_title(mode))
            .size(20)
            .color(theme::RosterTheme::TEXT_PRIMARY),
        full_name,
        user_name,
        role,
        actions,
    ]
    .spacing(16)
    .max_width(480.0);

    container(
        container(content)
            .style(theme::Container::Card.style())
            .padding(24),
    )
    .center_x(Length::Fill)
    .padding(20)
    .into()
}
