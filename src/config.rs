//! Settings for the desktop front-end

/// Window and rendering options. The rule engine itself has no settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Initial window size (width, height)
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Draw A-O / 1-15 labels around the board
    pub show_coordinates: bool,
    pub highlight_last_move: bool,
    /// Ghost stone under the pointer
    pub show_hover_preview: bool,
    /// Default `env_logger` filter, `RUST_LOG` takes precedence
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Gomoku".to_string(),
            window_size: [900.0, 680.0],
            min_window_size: [720.0, 560.0],
            show_coordinates: true,
            highlight_last_move: true,
            show_hover_preview: true,
            log_filter: "info".to_string(),
        }
    }
}
