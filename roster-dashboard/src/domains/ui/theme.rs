use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, text_input},
};

/// Dark dashboard theme with a teal accent
#[derive(Debug, Clone, Copy)]
pub struct RosterTheme;

impl RosterTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.05, 0.05, 0.06);
    pub const ACCENT: Color = Color::from_rgb(0.0, 0.66, 0.62);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.1, 0.75, 0.7);
    pub const ACCENT_PRESSED: Color = Color::from_rgb(0.0, 0.5, 0.47);

    // Grays
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.11);
    pub const ROW_ALT_BG: Color = Color::from_rgb(0.13, 0.13, 0.14);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.22);
    pub const SURFACE_DIM: Color = Color::from_rgb(0.08, 0.08, 0.08);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_SUBDUED: Color = Color::from_rgb(0.6, 0.6, 0.6);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4); // #00CC66
    pub const WARNING: Color = Color::from_rgb(1.0, 0.6, 0.0); // #FF9900
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.6);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Roster Dark", palette)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Container {
    Card,
    Header,
    TableHeader,
    Row,
    RowAlt,
    Scrim,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::CARD_BG)),
                border: Border {
                    color: RosterTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            },
            Container::Header => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::SURFACE_DIM)),
                border: Border {
                    color: RosterTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            },
            Container::TableHeader => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_SECONDARY),
                background: Some(Background::Color(RosterTheme::SURFACE_DIM)),
                ..Default::default()
            },
            Container::Row => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::CARD_BG)),
                ..Default::default()
            },
            Container::RowAlt => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::ROW_ALT_BG)),
                ..Default::default()
            },
            Container::Scrim => |_| container::Style {
                text_color: Some(RosterTheme::TEXT_PRIMARY),
                background: Some(Background::Color(RosterTheme::SCRIM)),
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Secondary,
    Destructive,
    Text,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered => RosterTheme::ACCENT_HOVER,
                    button::Status::Pressed => RosterTheme::ACCENT_PRESSED,
                    button::Status::Disabled => RosterTheme::BORDER_COLOR,
                    _ => RosterTheme::ACCENT,
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: RosterTheme::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    shadow: Shadow {
                        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                        offset: Vector::new(0.0, 2.0),
                        blur_radius: 4.0,
                    },
                    ..Default::default()
                }
            },
            Button::Secondary => |_, status| {
                let border_color = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        RosterTheme::ACCENT
                    }
                    _ => RosterTheme::BORDER_COLOR,
                };
                button::Style {
                    background: Some(Background::Color(RosterTheme::CARD_BG)),
                    text_color: RosterTheme::TEXT_PRIMARY,
                    border: Border {
                        color: border_color,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            },
            Button::Destructive => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        RosterTheme::ERROR
                    }
                    _ => Color::from_rgb(0.6, 0.1, 0.1),
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: RosterTheme::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            },
            Button::Text => |_, status| {
                let text_color = match status {
                    button::Status::Hovered => RosterTheme::TEXT_PRIMARY,
                    _ => RosterTheme::TEXT_SUBDUED,
                };
                button::Style {
                    background: None,
                    text_color,
                    ..Default::default()
                }
            },
        }
    }
}

pub fn text_input_style(
    _theme: &Theme,
    status: text_input::Status,
) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => RosterTheme::ACCENT,
        _ => RosterTheme::BORDER_COLOR,
    };

    text_input::Style {
        background: Background::Color(RosterTheme::SURFACE_DIM),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: RosterTheme::TEXT_SUBDUED,
        placeholder: RosterTheme::TEXT_SUBDUED,
        value: RosterTheme::TEXT_PRIMARY,
        selection: RosterTheme::ACCENT,
    }
}
