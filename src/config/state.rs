// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Version,
    Source,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Package table ordering (click a header to change)
    pub sort_column: SortColumn,
    pub sort_ascending: bool,

    /// Text of the commit message field
    pub commit_message: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 900,
            window_h: 750,
            sort_column: SortColumn::Name,
            sort_ascending: true,
            commit_message: s!(super::consts::DEFAULT_COMMIT_MESSAGE),
        }
    }
}

impl GuiState {
    /// Same column → flip direction; new column → ascending.
    pub fn toggle_sort(&mut self, col: SortColumn) {
        if self.sort_column == col {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_column = col;
            self.sort_ascending = true;
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sort_flips_then_resets() {
        let mut g = GuiState::default();
        g.toggle_sort(SortColumn::Name);
        assert!(!g.sort_ascending);
        g.toggle_sort(SortColumn::Source);
        assert_eq!(g.sort_column, SortColumn::Source);
        assert!(g.sort_ascending);
    }
}
