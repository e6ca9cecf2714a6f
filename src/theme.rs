use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub series_colors: Vec<String>,
}

impl Theme {
    /// Default data-vis palette. Series without an explicit color cycle
    /// through it by their position in the configuration.
    pub fn default_palette() -> Self {
        Self {
            series_colors: vec![
                "rgb(90,191,248)".to_string(),
                "rgb(226,141,23)".to_string(),
                "rgb(123,188,0)".to_string(),
                "rgb(189,93,181)".to_string(),
                "rgb(86,180,213)".to_string(),
                "rgb(230,199,24)".to_string(),
                "rgb(227,129,138)".to_string(),
                "rgb(63,94,188)".to_string(),
            ],
        }
    }

    /// Palette color for the series at `index`, wrapping when the palette
    /// is exhausted.
    pub fn color_for(&self, index: usize) -> String {
        if self.series_colors.is_empty() {
            return "#333".to_string();
        }
        self.series_colors[index % self.series_colors.len()].clone()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_palette()
    }
}
