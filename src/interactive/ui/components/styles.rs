use crate::interactive::domain::models::MessageKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
};

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn action_key() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(ColorScheme::SECONDARY)
        } else {
            Style::default().fg(ColorScheme::TEXT_DIM)
        }
    }

    pub fn button(busy: bool) -> Style {
        if busy {
            Style::default()
                .fg(ColorScheme::TEXT_DIM)
                .add_modifier(Modifier::ITALIC)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(ColorScheme::PRIMARY)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn message(kind: MessageKind) -> Style {
        let color = match kind {
            MessageKind::Success => ColorScheme::SUCCESS,
            MessageKind::Error => ColorScheme::ERROR,
            MessageKind::Info => ColorScheme::INFO,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
