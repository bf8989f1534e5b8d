use iced::widget::{Stack, column, container};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::views::{
    view_header, view_loading_overlay, view_toast_overlay, view_user_form,
    view_users_table,
};
use crate::domains::users::ViewMode;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let users = &state.domains.users.state;

    let body = match &users.mode {
        ViewMode::Listing => view_users_table(state),
        ViewMode::Form(mode) => view_user_form(state, mode),
    };

    let base = container(
        column![
            view_header(state),
            container(body)
                .padding(20)
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if state.domains.ui.state.toast_manager.has_toasts() {
        layers = layers.push(view_toast_overlay(state));
    }

    // Last so it also covers the toasts
    if users.is_loading() {
        layers = layers.push(view_loading_overlay());
    }

    layers.into()
}
