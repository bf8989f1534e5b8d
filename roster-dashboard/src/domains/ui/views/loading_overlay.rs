use iced::widget::{column, container, opaque, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;

/// Full-screen scrim that swallows input while requests are pending
pub fn view_loading_overlay<'a>() -> Element<'a, DomainMessage> {
    let indicator = container(
        column![
            text("Loading...")
                .size(18)
                .color(theme::RosterTheme::TEXT_PRIMARY),
            text("Waiting for the server")
                .size(12)
                .color(theme::RosterTheme::TEXT_SUBDUED),
        ]
        .spacing(6)
        .align_x(Alignment::Center),
    )
    .style(theme::Container::Card.style())
    .padding([18, 28]);

    opaque(
        container(indicator)
            .style(theme::Container::Scrim.style())
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
}
