//! Size presets mapped to concrete layout dimensions.

use tessera_ui::Dp;

/// Size preset for the picker and its input variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerSize {
    /// Compact.
    Sm,
    /// Regular.
    #[default]
    Md,
    /// Alias of [`PickerSize::Md`].
    Lg,
}

/// Concrete dimensions backing a [`PickerSize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTokens {
    /// Width of the calendar panel.
    pub date_panel_width: Dp,
    /// Inner padding of each panel.
    pub panel_padding: Dp,
    /// Width of a day/month/year cell.
    pub cell_width: Dp,
    /// Height of a day/month/year cell.
    pub cell_height: Dp,
    /// Side of the square navigation buttons.
    pub nav_button: Dp,
    /// Height of a shortcut chip.
    pub shortcut_height: Dp,
    /// Width of the time panel.
    pub time_panel_width: Dp,
    /// Height of each scrolling time column.
    pub time_column_height: Dp,
    /// Width of a time cell.
    pub time_cell_width: Dp,
    /// Height of a time cell.
    pub time_cell_height: Dp,
    /// Font size of the header labels.
    pub header_font: Dp,
    /// Font size of grid cells.
    pub cell_font: Dp,
    /// Font size of the input field text.
    pub input_font: Dp,
}

const MD_TOKENS: SizeTokens = SizeTokens {
    date_panel_width: Dp(300.0),
    panel_padding: Dp(10.0),
    cell_width: Dp(35.0),
    cell_height: Dp(30.0),
    nav_button: Dp(35.0),
    shortcut_height: Dp(35.0),
    time_panel_width: Dp(250.0),
    time_column_height: Dp(210.0),
    time_cell_width: Dp(51.0),
    time_cell_height: Dp(30.0),
    header_font: Dp(16.0),
    cell_font: Dp(14.0),
    input_font: Dp(15.0),
};

const SM_TOKENS: SizeTokens = SizeTokens {
    date_panel_width: Dp(250.0),
    panel_padding: Dp(3.0),
    cell_width: Dp(30.0),
    cell_height: Dp(25.0),
    nav_button: Dp(25.0),
    shortcut_height: Dp(25.0),
    time_panel_width: Dp(200.0),
    time_column_height: Dp(170.0),
    time_cell_width: Dp(30.0),
    time_cell_height: Dp(25.0),
    header_font: Dp(14.0),
    cell_font: Dp(12.0),
    input_font: Dp(13.0),
};

impl PickerSize {
    /// The dimension set for this preset.
    pub fn tokens(self) -> SizeTokens {
        match self {
            PickerSize::Sm => SM_TOKENS,
            PickerSize::Md | PickerSize::Lg => MD_TOKENS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lg_aliases_md() {
        assert_eq!(PickerSize::Lg.tokens(), PickerSize::Md.tokens());
    }

    #[test]
    fn test_sm_is_compact() {
        let sm = PickerSize::Sm.tokens();
        let md = PickerSize::Md.tokens();
        assert!(sm.date_panel_width.0 < md.date_panel_width.0);
        assert!(sm.cell_height.0 < md.cell_height.0);
    }
}
