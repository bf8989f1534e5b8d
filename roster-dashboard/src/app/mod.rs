use std::sync::Arc;

use iced::{Size, Theme};

use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Run the dashboard until its window closes.
pub fn run(config: AppConfig) -> iced::Result {
    let boot_config = Arc::new(config);

    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .title("Roster - User Management")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window_size(Size::new(1100.0, 720.0))
    .run()
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::RosterTheme::theme()
}
