//! Domain modules: each owns a slice of state plus its messages and update logic

pub mod ui;
pub mod users;

/// All domain state, grouped the way the root update routes messages
#[derive(Debug)]
pub struct Domains {
    pub users: users::UsersDomain,
    pub ui: ui::UiDomain,
}
