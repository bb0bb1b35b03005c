//! 设置页状态

/// 设置页的可调项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    UiLanguage,
    DataLanguage,
    Theme,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 3] = [
        SettingsRow::UiLanguage,
        SettingsRow::DataLanguage,
        SettingsRow::Theme,
    ];
}

/// 设置页状态
#[derive(Debug, Default)]
pub struct SettingsState {
    /// 当前选中的行索引
    pub selected: usize,
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < SettingsRow::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    /// 当前选中的设置项
    pub fn current_row(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected.min(SettingsRow::ALL.len() - 1)]
    }
}
