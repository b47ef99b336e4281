//! Display-label tables for the supported locales.

/// Locale key selecting the picker's label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English.
    En,
    /// Traditional Chinese.
    #[default]
    Zh,
    /// Simplified Chinese.
    ZhCn,
}

impl Locale {
    /// Short weekday header, Sunday-first (`index` in 0..7).
    pub fn weekday_short(self, index: usize) -> &'static str {
        const EN: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
        const ZH: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];
        let table = match self {
            Locale::En => &EN,
            Locale::Zh | Locale::ZhCn => &ZH,
        };
        table[index % 7]
    }

    /// Short month label for the month grid (`month` in 1..=12).
    pub fn month_short(self, month: u32) -> &'static str {
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        const ZH: [&str; 12] = [
            "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
        ];
        let table = match self {
            Locale::En => &EN,
            Locale::Zh | Locale::ZhCn => &ZH,
        };
        table[((month.clamp(1, 12)) - 1) as usize]
    }

    /// Column headers for the hour/minute/second selectors.
    pub fn time_unit_labels(self) -> [&'static str; 3] {
        match self {
            Locale::En => ["Hour", "Min", "Sec"],
            Locale::Zh => ["時", "分", "秒"],
            Locale::ZhCn => ["时", "分", "秒"],
        }
    }

    /// Prompt shown in the time panel while nothing is selected.
    pub fn select_prompt(self) -> &'static str {
        match self {
            Locale::En => "Please select date and time",
            Locale::Zh => "請選擇日期和時間",
            Locale::ZhCn => "请选择日期和时间",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_headers_start_on_sunday() {
        assert_eq!(Locale::En.weekday_short(0), "Su");
        assert_eq!(Locale::En.weekday_short(6), "Sa");
        assert_eq!(Locale::Zh.weekday_short(0), "日");
    }

    #[test]
    fn test_month_labels_cover_all_months() {
        assert_eq!(Locale::En.month_short(1), "Jan");
        assert_eq!(Locale::En.month_short(12), "Dec");
        assert_eq!(Locale::ZhCn.month_short(10), "10月");
    }

    #[test]
    fn test_chinese_variants_differ_where_scripts_differ() {
        assert_ne!(Locale::Zh.time_unit_labels()[0], Locale::ZhCn.time_unit_labels()[0]);
        assert_ne!(Locale::Zh.select_prompt(), Locale::ZhCn.select_prompt());
    }
}
