use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme;
use crate::domains::ui::view_models::{
    EMPTY_TABLE_TEXT, TABLE_COLUMNS, TableRow, table_rows,
};
use crate::domains::users::UsersMessage;
use crate::state::State;

// Relative column widths: #, full name, user name, role, actions
const PORTIONS: [u16; 5] = [1, 4, 3, 2, 3];

pub fn view_users_table(state: &State) -> Element<'_, DomainMessage> {
    let labels: Vec<Element<'_, DomainMessage>> = TABLE_COLUMNS
        .iter()
        .zip(PORTIONS)
        .map(|(label, portion)| {
            text(*label)
                .size(14)
                .color(theme::RosterTheme::TEXT_SECONDARY)
                .width(Length::FillPortion(portion))
                .into()
        })
        .collect();
    let header = row(labels).spacing(10);

    let mut rows = column![
        container(header)
            .style(theme::Container::TableHeader.style())
            .padding([10, 12])
            .width(Length::Fill)
    ];

    for (i, table_row) in table_rows(&state.domains.users.state)
        .into_iter()
        .enumerate()
    {
        rows = rows.push(view_row(table_row, i % 2 == 1));
    }

    container(scrollable(rows.spacing(2)).height(Length::Fill))
        .style(theme::Container::Card.style())
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_row<'a>(
    table_row: TableRow,
    alternate: bool,
) -> Element<'a, DomainMessage> {
    let style = if alternate {
        theme::Container::RowAlt
    } else {
        theme::Container::Row
    };

    let content: Element<'a, DomainMessage> = match table_row {
        TableRow::Empty => text(EMPTY_TABLE_TEXT)
            .size(14)
            .color(theme::RosterTheme::TEXT_SUBDUED)
            .width(Length::Fill)
            .center()
            .into(),
        TableRow::User {
            index,
            user_id,
            full_name,
            user_name,
            role,
        } => {
            let actions = row![
                button(text("Delete").size(13))
                    .style(theme::Button::Destructive.style())
                    .padding([6, 10])
                    .on_press(UsersMessage::DeleteUser(user_id.clone()).into()),
                button(text("Edit").size(13))
                    .style(theme::Button::Secondary.style())
                    .padding([6, 10])
                    .on_press(UsersMessage::BeginEdit(user_id).into()),
            ]
            .spacing(8)
            .width(Length::FillPortion(PORTIONS[4]));

            row![
                text(index.to_string())
                    .size(14)
                    .width(Length::FillPortion(PORTIONS[0])),
                text(full_name)
                    .size(14)
                    .width(Length::FillPortion(PORTIONS[1])),
                text(user_name)
                    .size(14)
                    .width(Length::FillPortion(PORTIONS[2])),
                text(role)
                    .size(14)
                    .color(theme::RosterTheme::TEXT_SECONDARY)
                    .width(Length::FillPortion(PORTIONS[3])),
                actions,
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into()
        }
    };

    container(content)
        .style(style.style())
        .padding([10, 12])
        .width(Length::Fill)
        .into()
}
