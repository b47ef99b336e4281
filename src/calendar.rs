//! Calendar view-state and bounds logic for the date/time pickers.
//!
//! Everything here is pure state: no component imports, no rendering. The
//! picker components snapshot a [`CalendarState`] each frame and route user
//! gestures back into it.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

/// Columns in the day grid.
pub const DAY_COLUMNS: usize = 7;
/// Rows in the day grid.
pub const DAY_ROWS: usize = 6;
/// Cells in the year grid: a decade plus one padding year on each side.
pub const YEAR_CELLS: usize = 12;

/// Which grid the picker is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarView {
    /// The day-of-month grid.
    #[default]
    Days,
    /// The 12-month grid for the reference year.
    Months,
    /// The 12-year decade window.
    Years,
}

/// Navigation direction for the header arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward earlier months/years.
    Back,
    /// Toward later months/years.
    Forward,
}

/// One time-of-day column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Hours, 0-23.
    Hour,
    /// Minutes, 0-59.
    Minute,
    /// Seconds, 0-59.
    Second,
}

impl TimeUnit {
    /// Number of selectable values in this unit's column.
    pub fn cell_count(self) -> u32 {
        match self {
            TimeUnit::Hour => 24,
            TimeUnit::Minute | TimeUnit::Second => 60,
        }
    }
}

/// Picker variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerVariant {
    /// Regular date picker.
    #[default]
    Date,
    /// Bounds pinned to the current calendar year; year navigation hidden.
    Anniversary,
}

/// Independently settable hour/minute/second fields.
///
/// Fields stay unset until the user touches them; [`CalendarState::select_day`]
/// zero-fills whatever is still unset so a freshly picked date reads as
/// midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeFields {
    /// Selected hour, if any.
    pub hour: Option<u32>,
    /// Selected minute, if any.
    pub minute: Option<u32>,
    /// Selected second, if any.
    pub second: Option<u32>,
}

impl TimeFields {
    /// Captures all three fields from an instant.
    pub fn from_instant(instant: NaiveDateTime) -> Self {
        Self {
            hour: Some(instant.hour()),
            minute: Some(instant.minute()),
            second: Some(instant.second()),
        }
    }

    /// Returns the field for `unit`.
    pub fn get(self, unit: TimeUnit) -> Option<u32> {
        match unit {
            TimeUnit::Hour => self.hour,
            TimeUnit::Minute => self.minute,
            TimeUnit::Second => self.second,
        }
    }

    /// Sets the field for `unit`.
    pub fn set(&mut self, unit: TimeUnit, value: u32) {
        match unit {
            TimeUnit::Hour => self.hour = Some(value),
            TimeUnit::Minute => self.minute = Some(value),
            TimeUnit::Second => self.second = Some(value),
        }
    }

    /// Merges every set field into `date`'s midnight instant.
    pub fn apply_to(self, date: NaiveDate) -> NaiveDateTime {
        let mut instant = date.and_time(NaiveTime::MIN);
        if let Some(hour) = self.hour {
            instant = instant.with_hour(hour).unwrap_or(instant);
        }
        if let Some(minute) = self.minute {
            instant = instant.with_minute(minute).unwrap_or(instant);
        }
        if let Some(second) = self.second {
            instant = instant.with_second(second).unwrap_or(instant);
        }
        instant
    }
}

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar date this cell selects.
    pub date: NaiveDate,
    /// False for overflow cells belonging to an adjacent month.
    pub in_month: bool,
}

/// One cell of the year grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    /// The year this cell selects.
    pub year: i32,
    /// True for the two pad years outside the decade window.
    pub is_padding: bool,
}

/// A labeled instant offered for one-click selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortcut {
    /// Label shown next to the formatted instant.
    pub label: String,
    /// The instant selected by this shortcut.
    pub instant: NaiveDateTime,
    /// Optional format override for the shortcut's own display.
    pub format: Option<String>,
}

impl Shortcut {
    /// Creates a shortcut formatted with the picker's format.
    pub fn new(label: impl Into<String>, instant: NaiveDateTime) -> Self {
        Self {
            label: label.into(),
            instant,
            format: None,
        }
    }

    /// Overrides the format used for this shortcut's display.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// Replaces the year/month/day of `value` with `date`, keeping the time.
pub fn merge_date(value: NaiveDateTime, date: NaiveDate) -> NaiveDateTime {
    date.and_time(value.time())
}

/// Substitutes one time field of `instant`.
pub fn with_unit(instant: NaiveDateTime, unit: TimeUnit, value: u32) -> NaiveDateTime {
    match unit {
        TimeUnit::Hour => instant.with_hour(value),
        TimeUnit::Minute => instant.with_minute(value),
        TimeUnit::Second => instant.with_second(value),
    }
    .unwrap_or(instant)
}

fn unit_start(instant: NaiveDateTime, unit: TimeUnit) -> NaiveDateTime {
    match unit {
        TimeUnit::Hour => instant
            .with_minute(0)
            .and_then(|i| i.with_second(0))
            .unwrap_or(instant),
        TimeUnit::Minute => instant.with_second(0).unwrap_or(instant),
        TimeUnit::Second => instant,
    }
}

fn unit_end(instant: NaiveDateTime, unit: TimeUnit) -> NaiveDateTime {
    match unit {
        TimeUnit::Hour => instant
            .with_minute(59)
            .and_then(|i| i.with_second(59))
            .unwrap_or(instant),
        TimeUnit::Minute => instant.with_second(59).unwrap_or(instant),
        TimeUnit::Second => instant,
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    if delta < 0 {
        date.checked_sub_months(months).unwrap_or(date)
    } else {
        date.checked_add_months(months).unwrap_or(date)
    }
}

fn start_of_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(|d| d.and_time(NaiveTime::MIN))
}

fn end_of_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 12, 31).and_then(|d| d.and_hms_opt(23, 59, 59))
}

fn pin_year(instant: NaiveDateTime, year: i32) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(year, instant.month(), instant.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, instant.month(), 28))
        .unwrap_or_else(|| instant.date());
    date.and_time(instant.time())
}

/// View-state for one picker instance: the reference month, the selection,
/// the active grid, and the optional bounds.
///
/// The `today` snapshot is taken once at construction and reused for "today"
/// highlighting and as the base instant for unselected time columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarState {
    today: NaiveDateTime,
    reference_month: NaiveDate,
    selected_date: Option<NaiveDate>,
    time: TimeFields,
    view: CalendarView,
    variant: PickerVariant,
    not_before: Option<NaiveDateTime>,
    not_after: Option<NaiveDateTime>,
}

impl CalendarState {
    /// Creates a calendar state anchored at `now`.
    ///
    /// The anniversary variant replaces any supplied bounds with the start and
    /// end of `now`'s calendar year. `initial` selects a value up front, as a
    /// caller-supplied default does.
    pub fn new(
        variant: PickerVariant,
        not_before: Option<NaiveDateTime>,
        not_after: Option<NaiveDateTime>,
        initial: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Self {
        let (not_before, not_after) = match variant {
            PickerVariant::Anniversary => (start_of_year(now.year()), end_of_year(now.year())),
            PickerVariant::Date => (not_before, not_after),
        };
        let mut state = Self {
            today: now,
            reference_month: month_start(now.date()),
            selected_date: None,
            time: TimeFields::default(),
            view: CalendarView::Days,
            variant,
            not_before,
            not_after,
        };
        if let Some(initial) = initial {
            state.set_value(initial);
        }
        state
    }

    /// The construction-time snapshot used for "today" highlighting.
    pub fn today(&self) -> NaiveDateTime {
        self.today
    }

    /// First day of the month currently anchoring the grid.
    pub fn reference_month(&self) -> NaiveDate {
        self.reference_month
    }

    /// The selected calendar date, if any.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// The independently selected time fields.
    pub fn time_fields(&self) -> TimeFields {
        self.time
    }

    /// The grid currently shown.
    pub fn view(&self) -> CalendarView {
        self.view
    }

    /// Switches the visible grid.
    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    /// The picker variant.
    pub fn variant(&self) -> PickerVariant {
        self.variant
    }

    /// Inclusive earliest selectable instant, if bounded.
    pub fn not_before(&self) -> Option<NaiveDateTime> {
        self.not_before
    }

    /// Inclusive latest selectable instant, if bounded.
    pub fn not_after(&self) -> Option<NaiveDateTime> {
        self.not_after
    }

    /// Replaces selection and reference month from a complete instant.
    pub fn set_value(&mut self, instant: NaiveDateTime) {
        let instant = match self.variant {
            PickerVariant::Anniversary => pin_year(instant, self.today.year()),
            PickerVariant::Date => instant,
        };
        self.reference_month = month_start(instant.date());
        self.selected_date = Some(instant.date());
        self.time = TimeFields::from_instant(instant);
    }

    /// Mirrors an externally controlled value into display state, ignoring
    /// repeats so navigation is not reset on every frame.
    pub fn sync_controlled(&mut self, value: NaiveDateTime) {
        let pinned = match self.variant {
            PickerVariant::Anniversary => pin_year(value, self.today.year()),
            PickerVariant::Date => value,
        };
        if self.selected_date == Some(pinned.date()) && self.time == TimeFields::from_instant(pinned)
        {
            return;
        }
        self.set_value(value);
    }

    /// Whether the header arrow for `direction` is usable.
    ///
    /// Only the anniversary variant clamps: the reference month may not leave
    /// today's calendar year.
    pub fn can_navigate(&self, direction: NavDirection) -> bool {
        if self.variant != PickerVariant::Anniversary {
            return true;
        }
        let year = self.today.year();
        match direction {
            NavDirection::Back => shift_months(self.reference_month, -1).year() >= year,
            NavDirection::Forward => shift_months(self.reference_month, 1).year() <= year,
        }
    }

    /// Moves the reference month by one unit of the current view: a month in
    /// the day grid, a year in the month grid, a decade in the year grid.
    pub fn navigate(&mut self, direction: NavDirection) {
        if !self.can_navigate(direction) {
            return;
        }
        let months = match self.view {
            CalendarView::Days => 1,
            CalendarView::Months => 12,
            CalendarView::Years => 120,
        };
        let delta = match direction {
            NavDirection::Back => -months,
            NavDirection::Forward => months,
        };
        self.reference_month = shift_months(self.reference_month, delta);
        debug!(reference_month = %self.reference_month, "navigated");
    }

    /// Month-grid selection: move the reference month and drop back to the
    /// day grid.
    pub fn select_month(&mut self, year: i32, month: u32) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            self.reference_month = date;
        }
        self.view = CalendarView::Days;
    }

    /// Year-grid selection: move the reference year and show the month grid.
    pub fn select_year(&mut self, year: i32) {
        if let Some(date) = NaiveDate::from_ymd_opt(year, self.reference_month.month(), 1) {
            self.reference_month = date;
        }
        self.view = CalendarView::Months;
    }

    /// Day-grid selection: sets the date, zero-fills any still-unset time
    /// field, and reconciles the composed instant against the bounds.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        self.time.hour.get_or_insert(0);
        self.time.minute.get_or_insert(0);
        self.time.second.get_or_insert(0);
        self.reconcile_time();
    }

    /// Time-column selection: sets one field independently, then reconciles.
    pub fn select_time(&mut self, unit: TimeUnit, value: u32) {
        if value >= unit.cell_count() {
            return;
        }
        self.time.set(unit, value);
        self.reconcile_time();
    }

    /// Shortcut selection: date, all three time fields, and the reference
    /// month follow the shortcut's instant.
    pub fn select_shortcut(&mut self, instant: NaiveDateTime) {
        self.selected_date = Some(instant.date());
        self.time = TimeFields::from_instant(instant);
        self.reference_month = month_start(instant.date());
        self.reconcile_time();
    }

    /// Drops the selection and every time field.
    pub fn clear(&mut self) {
        self.selected_date = None;
        self.time = TimeFields::default();
    }

    /// The value this state currently represents: the selected date with
    /// every set time field merged in, or nothing while no date is selected.
    pub fn effective_value(&self) -> Option<NaiveDateTime> {
        self.selected_date.map(|date| self.time.apply_to(date))
    }

    /// Whether a day cell is outside the bounds, compared at day granularity
    /// so the day containing a bound stays selectable.
    pub fn is_day_disabled(&self, date: NaiveDate) -> bool {
        if let Some(bound) = self.not_before
            && date < bound.date()
        {
            return true;
        }
        if let Some(bound) = self.not_after
            && date > bound.date()
        {
            return true;
        }
        false
    }

    /// Whether a month cell is outside the bounds, compared at month
    /// granularity.
    pub fn is_month_disabled(&self, year: i32, month: u32) -> bool {
        if let Some(bound) = self.not_before
            && (year, month) < (bound.year(), bound.month())
        {
            return true;
        }
        if let Some(bound) = self.not_after
            && (year, month) > (bound.year(), bound.month())
        {
            return true;
        }
        false
    }

    /// Whether a year cell is outside the bounds, compared at year
    /// granularity.
    pub fn is_year_disabled(&self, year: i32) -> bool {
        if let Some(bound) = self.not_before
            && year < bound.year()
        {
            return true;
        }
        if let Some(bound) = self.not_after
            && year > bound.year()
        {
            return true;
        }
        false
    }

    /// The instant a time-column cell stands for: the effective value (or the
    /// `today` snapshot) with `unit` substituted, snapped to the start/end of
    /// the unit when the result lands on the same calendar day as a bound.
    ///
    /// The snap keeps a truncated candidate from reading as out of bounds:
    /// with an upper bound of 14:30, hour cell 14 compares as 14:00, not as
    /// whatever minutes the current selection carries.
    pub fn time_cell_instant(&self, unit: TimeUnit, value: u32) -> NaiveDateTime {
        let base = self.effective_value().unwrap_or(self.today);
        let mut instant = with_unit(base, unit, value);
        if let Some(bound) = self.not_before
            && instant.date() == bound.date()
        {
            instant = with_unit(unit_end(instant, unit), unit, value);
        }
        if let Some(bound) = self.not_after
            && instant.date() == bound.date()
        {
            instant = with_unit(unit_start(instant, unit), unit, value);
        }
        instant
    }

    /// Whether a time-column cell is disabled. All time cells are disabled
    /// while a bound exists but no date is selected; otherwise the snapped
    /// candidate instant is compared against the bounds.
    pub fn is_time_value_disabled(&self, unit: TimeUnit, value: u32) -> bool {
        if (self.not_before.is_some() || self.not_after.is_some()) && self.selected_date.is_none() {
            return true;
        }
        let instant = self.time_cell_instant(unit, value);
        if let Some(bound) = self.not_before
            && instant < bound
        {
            return true;
        }
        if let Some(bound) = self.not_after
            && instant > bound
        {
            return true;
        }
        false
    }

    /// Whether a shortcut's instant falls outside the bounds, inclusive at
    /// both ends.
    pub fn is_shortcut_disabled(&self, instant: NaiveDateTime) -> bool {
        if let Some(bound) = self.not_before
            && instant < bound
        {
            return true;
        }
        if let Some(bound) = self.not_after
            && instant > bound
        {
            return true;
        }
        false
    }

    /// Snaps already-chosen time fields that violate a bound to the bound's
    /// own field values, cascading hour, then minute, then second with unset
    /// fields defaulted to zero. Runs inside every selection operation so an
    /// out-of-bounds combination never survives to a change notification.
    pub fn reconcile_time(&mut self) {
        let Some(date) = self.selected_date else {
            return;
        };
        let base = self.time.apply_to(date);
        let mut fields = self.time;
        if let Some(bound) = self.not_before {
            fields = snap_fields(base, fields, bound, |candidate, bound| candidate < bound);
        }
        if let Some(bound) = self.not_after {
            fields = snap_fields(base, fields, bound, |candidate, bound| candidate > bound);
        }
        if fields == self.time {
            return;
        }
        debug!(?fields, "time fields snapped to bounds");
        self.time = fields;
    }

    /// Day grid: always exactly 42 cells, starting at the Sunday on or before
    /// the first of the reference month.
    pub fn day_cells(&self) -> Vec<DayCell> {
        let first = self.reference_month;
        let offset = first.weekday().num_days_from_sunday() as u64;
        let start = first.checked_sub_days(Days::new(offset)).unwrap_or(first);
        start
            .iter_days()
            .take(DAY_COLUMNS * DAY_ROWS)
            .map(|date| DayCell {
                date,
                in_month: date.year() == first.year() && date.month() == first.month(),
            })
            .collect()
    }

    /// First year of the decade containing the reference month.
    pub fn decade_start(&self) -> i32 {
        let year = self.reference_month.year();
        year - year.rem_euclid(10)
    }

    /// Year grid: the decade window offset by one so a padding year flanks it
    /// on each side.
    pub fn year_cells(&self) -> [YearCell; YEAR_CELLS] {
        let decade = self.decade_start();
        std::array::from_fn(|i| {
            let year = decade - 1 + i as i32;
            YearCell {
                year,
                is_padding: year < decade || year >= decade + 10,
            }
        })
    }
}

fn snap_fields(
    base: NaiveDateTime,
    mut fields: TimeFields,
    bound: NaiveDateTime,
    violates: impl Fn(NaiveDateTime, NaiveDateTime) -> bool,
) -> TimeFields {
    let candidate = with_unit(base, TimeUnit::Hour, fields.hour.unwrap_or(0));
    if violates(candidate, bound) {
        fields.hour = Some(bound.hour());
    }
    let with_hour = with_unit(base, TimeUnit::Hour, fields.hour.unwrap_or(0));
    let candidate = with_unit(with_hour, TimeUnit::Minute, fields.minute.unwrap_or(0));
    if violates(candidate, bound) {
        fields.minute = Some(bound.minute());
    }
    let with_minute = with_unit(with_hour, TimeUnit::Minute, fields.minute.unwrap_or(0));
    let candidate = with_unit(with_minute, TimeUnit::Second, fields.second.unwrap_or(0));
    if violates(candidate, bound) {
        fields.second = Some(bound.second());
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, minute, second).unwrap()
    }

    fn plain_state() -> CalendarState {
        CalendarState::new(
            PickerVariant::Date,
            None,
            None,
            None,
            instant(2024, 1, 20, 12, 0, 0),
        )
    }

    fn bounded_state(
        not_before: Option<NaiveDateTime>,
        not_after: Option<NaiveDateTime>,
    ) -> CalendarState {
        CalendarState::new(
            PickerVariant::Date,
            not_before,
            not_after,
            None,
            instant(2024, 1, 20, 12, 0, 0),
        )
    }

    #[test]
    fn test_day_grid_always_42_cells() {
        let mut state = plain_state();
        for _ in 0..30 {
            assert_eq!(state.day_cells().len(), DAY_COLUMNS * DAY_ROWS);
            state.navigate(NavDirection::Forward);
        }
    }

    #[test]
    fn test_day_grid_starts_on_sunday_before_first() {
        let state = plain_state();
        let cells = state.day_cells();
        // January 2024 starts on a Monday, so the grid opens on Sunday the
        // 31st of December.
        assert_eq!(cells[0].date, date(2023, 12, 31));
        assert!(!cells[0].in_month);
        assert_eq!(cells[1].date, date(2024, 1, 1));
        assert!(cells[1].in_month);
        assert_eq!(
            cells[0].date.weekday().num_days_from_sunday(),
            0,
            "grid must open on a Sunday"
        );
    }

    #[test]
    fn test_navigate_round_trip_per_view() {
        for view in [CalendarView::Days, CalendarView::Months, CalendarView::Years] {
            let mut state = plain_state();
            state.set_view(view);
            let start = state.reference_month();
            state.navigate(NavDirection::Forward);
            assert_ne!(state.reference_month(), start);
            state.navigate(NavDirection::Back);
            assert_eq!(state.reference_month(), start);
        }
    }

    #[test]
    fn test_navigate_unit_depends_on_view() {
        let mut state = plain_state();
        state.navigate(NavDirection::Forward);
        assert_eq!(state.reference_month(), date(2024, 2, 1));

        state.set_view(CalendarView::Months);
        state.navigate(NavDirection::Forward);
        assert_eq!(state.reference_month(), date(2025, 2, 1));

        state.set_view(CalendarView::Years);
        state.navigate(NavDirection::Forward);
        assert_eq!(state.reference_month(), date(2035, 2, 1));
    }

    #[test]
    fn test_anniversary_navigation_clamped_at_year_edges() {
        let mut state = CalendarState::new(
            PickerVariant::Anniversary,
            None,
            None,
            None,
            instant(2024, 1, 20, 12, 0, 0),
        );
        assert!(!state.can_navigate(NavDirection::Back));
        assert!(state.can_navigate(NavDirection::Forward));
        state.navigate(NavDirection::Back);
        assert_eq!(state.reference_month(), date(2024, 1, 1), "back is a no-op");

        for _ in 0..11 {
            state.navigate(NavDirection::Forward);
        }
        assert_eq!(state.reference_month(), date(2024, 12, 1));
        assert!(!state.can_navigate(NavDirection::Forward));
        state.navigate(NavDirection::Forward);
        assert_eq!(state.reference_month(), date(2024, 12, 1), "forward is a no-op");
        assert!(state.can_navigate(NavDirection::Back));
    }

    #[test]
    fn test_anniversary_pins_bounds_to_current_year() {
        let state = CalendarState::new(
            PickerVariant::Anniversary,
            Some(instant(1999, 1, 1, 0, 0, 0)),
            None,
            None,
            instant(2024, 6, 15, 12, 0, 0),
        );
        assert_eq!(state.not_before(), Some(instant(2024, 1, 1, 0, 0, 0)));
        assert_eq!(state.not_after(), Some(instant(2024, 12, 31, 23, 59, 59)));
    }

    #[test]
    fn test_bounds_are_inclusive_at_unit_level() {
        let lower = instant(2024, 1, 10, 14, 30, 0);
        let upper = instant(2024, 3, 20, 9, 15, 0);
        let state = bounded_state(Some(lower), Some(upper));

        assert!(!state.is_day_disabled(date(2024, 1, 10)));
        assert!(!state.is_day_disabled(date(2024, 3, 20)));
        assert!(state.is_day_disabled(date(2024, 1, 9)));
        assert!(state.is_day_disabled(date(2024, 3, 21)));

        assert!(!state.is_month_disabled(2024, 1));
        assert!(!state.is_month_disabled(2024, 3));
        assert!(state.is_month_disabled(2023, 12));
        assert!(state.is_month_disabled(2024, 4));

        assert!(!state.is_year_disabled(2024));
        assert!(state.is_year_disabled(2023));
        assert!(state.is_year_disabled(2025));
    }

    #[test]
    fn test_day_click_example_against_lower_bound() {
        // disableTimestampBefore = 2024-01-10: the 5th is disabled, the 15th
        // selects and reads back as exactly that day.
        let mut state = bounded_state(Some(instant(2024, 1, 10, 0, 0, 0)), None);
        assert!(state.is_day_disabled(date(2024, 1, 5)));
        assert!(!state.is_day_disabled(date(2024, 1, 15)));
        state.select_day(date(2024, 1, 15));
        assert_eq!(state.effective_value(), Some(instant(2024, 1, 15, 0, 0, 0)));
    }

    #[test]
    fn test_shortcut_selection_moves_reference_month() {
        let mut state = plain_state();
        let target = instant(2023, 7, 4, 8, 30, 15);
        state.select_shortcut(target);
        assert_eq!(state.reference_month(), date(2023, 7, 1));
        assert_eq!(state.selected_date(), Some(date(2023, 7, 4)));
        assert_eq!(state.effective_value(), Some(target));
    }

    #[test]
    fn test_shortcut_bounds_inclusive() {
        let lower = instant(2024, 1, 10, 0, 0, 0);
        let upper = instant(2024, 1, 20, 0, 0, 0);
        let state = bounded_state(Some(lower), Some(upper));
        assert!(!state.is_shortcut_disabled(lower));
        assert!(!state.is_shortcut_disabled(upper));
        assert!(state.is_shortcut_disabled(instant(2024, 1, 9, 23, 59, 59)));
        assert!(state.is_shortcut_disabled(instant(2024, 1, 20, 0, 0, 1)));
    }

    #[test]
    fn test_hour_cell_at_upper_bound_uses_unit_start() {
        // Upper bound 14:30 on the selected day: hour 14 stays enabled
        // because the cell compares as 14:00; hour 15 is out.
        let mut state = bounded_state(None, Some(instant(2024, 1, 15, 14, 30, 0)));
        state.select_day(date(2024, 1, 15));
        state.select_time(TimeUnit::Minute, 45);
        assert!(!state.is_time_value_disabled(TimeUnit::Hour, 14));
        assert!(state.is_time_value_disabled(TimeUnit::Hour, 15));
    }

    #[test]
    fn test_hour_cell_at_lower_bound_uses_unit_end() {
        let mut state = bounded_state(Some(instant(2024, 1, 15, 14, 30, 0)), None);
        state.select_day(date(2024, 1, 15));
        assert!(!state.is_time_value_disabled(TimeUnit::Hour, 14));
        assert!(state.is_time_value_disabled(TimeUnit::Hour, 13));
    }

    #[test]
    fn test_time_cells_disabled_until_date_selected_when_bounded() {
        let state = bounded_state(Some(instant(2024, 1, 10, 0, 0, 0)), None);
        assert!(state.is_time_value_disabled(TimeUnit::Hour, 12));
        let unbounded = plain_state();
        assert!(!unbounded.is_time_value_disabled(TimeUnit::Hour, 12));
    }

    #[test]
    fn test_select_day_zero_fills_unset_time_fields() {
        let mut state = plain_state();
        state.select_time(TimeUnit::Hour, 9);
        state.select_day(date(2024, 1, 15));
        assert_eq!(
            state.time_fields(),
            TimeFields {
                hour: Some(9),
                minute: Some(0),
                second: Some(0),
            }
        );
        assert_eq!(state.effective_value(), Some(instant(2024, 1, 15, 9, 0, 0)));
    }

    #[test]
    fn test_reconcile_snaps_time_up_to_lower_bound() {
        let mut state = bounded_state(Some(instant(2024, 1, 15, 14, 30, 0)), None);
        state.select_day(date(2024, 1, 15));
        // Zero-filled midnight violates the 14:30 floor, so hour and minute
        // snap to the bound's fields.
        assert_eq!(state.effective_value(), Some(instant(2024, 1, 15, 14, 30, 0)));
    }

    #[test]
    fn test_reconcile_snaps_time_down_to_upper_bound() {
        let mut state = bounded_state(None, Some(instant(2024, 1, 15, 14, 30, 0)));
        state.select_day(date(2024, 1, 15));
        state.select_time(TimeUnit::Hour, 16);
        assert_eq!(state.time_fields().hour, Some(14));
        let value = state.effective_value().unwrap();
        assert!(value <= instant(2024, 1, 15, 14, 30, 0));
    }

    #[test]
    fn test_effective_value_merges_only_set_fields() {
        let mut state = plain_state();
        assert_eq!(state.effective_value(), None);
        state.selected_date = Some(date(2024, 1, 15));
        state.time.minute = Some(30);
        assert_eq!(state.effective_value(), Some(instant(2024, 1, 15, 0, 30, 0)));
    }

    #[test]
    fn test_clear_drops_selection() {
        let mut state = plain_state();
        state.select_day(date(2024, 1, 15));
        state.clear();
        assert_eq!(state.effective_value(), None);
        assert_eq!(state.time_fields(), TimeFields::default());
    }

    #[test]
    fn test_year_window_is_decade_with_padding() {
        let state = plain_state();
        let cells = state.year_cells();
        assert_eq!(cells[0].year, 2019);
        assert!(cells[0].is_padding);
        assert_eq!(cells[1].year, 2020);
        assert!(!cells[1].is_padding);
        assert_eq!(cells[10].year, 2029);
        assert!(!cells[10].is_padding);
        assert_eq!(cells[11].year, 2030);
        assert!(cells[11].is_padding);
    }

    #[test]
    fn test_grid_selection_view_transitions() {
        let mut state = plain_state();
        state.set_view(CalendarView::Years);
        state.select_year(2031);
        assert_eq!(state.view(), CalendarView::Months);
        assert_eq!(state.reference_month().year(), 2031);
        state.select_month(2031, 5);
        assert_eq!(state.view(), CalendarView::Days);
        assert_eq!(state.reference_month(), date(2031, 5, 1));
    }

    #[test]
    fn test_sync_controlled_keeps_navigation_between_repeats() {
        let mut state = plain_state();
        let value = instant(2024, 3, 10, 8, 0, 0);
        state.sync_controlled(value);
        assert_eq!(state.reference_month(), date(2024, 3, 1));
        state.navigate(NavDirection::Forward);
        state.sync_controlled(value);
        assert_eq!(
            state.reference_month(),
            date(2024, 4, 1),
            "repeat sync must not reset navigation"
        );
        state.sync_controlled(instant(2024, 6, 1, 8, 0, 0));
        assert_eq!(state.reference_month(), date(2024, 6, 1));
    }

    #[test]
    fn test_merge_date_replaces_only_date_fields() {
        let value = instant(2024, 3, 10, 8, 45, 30);
        let merged = merge_date(value, date(2025, 1, 2));
        assert_eq!(merged, instant(2025, 1, 2, 8, 45, 30));
    }
}
