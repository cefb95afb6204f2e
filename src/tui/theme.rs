use ratatui::style::{Color, Style};

/// Color palette for the wallet UI
pub struct Theme {
    pub primary: Color,
    pub text_primary: Color,
    pub text_dim: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(98, 126, 234), // #627EEA - Ethereum blue
            text_primary: Color::Rgb(224, 224, 224), // #E0E0E0
            text_dim: Color::Rgb(128, 128, 128), // #808080
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Style for titles and active elements
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Primary text style
    pub fn text_primary_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Dim text style for hints and secondary labels
    pub fn text_dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}
