use crossterm::style::Color;

/// Midnight theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub error: Color,
    pub json: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            text: Color::Rgb { r: 169, g: 177, b: 214 },   // #A9B1D6 Light Blue
            accent: Color::Rgb { r: 122, g: 162, b: 247 }, // #7AA2F7 Blue
            dimmed: Color::Rgb { r: 100, g: 110, b: 150 }, // #646E96 Dimmed Blue
            error: Color::Rgb { r: 247, g: 118, b: 142 },  // #F7768E Coral Red
            json: Color::Rgb { r: 158, g: 206, b: 106 },   // #9ECE6A Green
        }
    }

    pub fn current() -> Self {
        Self::midnight()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use crossterm::style::Color;

    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
    pub fn json() -> Color {
        Theme::current().json
    }
}
