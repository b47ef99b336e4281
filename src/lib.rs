//! Date and time picker components for the Tessera UI framework.
//!
//! The crate provides two components: [`picker::date_picker`], an inline
//! calendar grid with optional hour/minute/second columns, quick-select
//! shortcuts, and OK/Cancel buttons; and [`input::date_picker_input`], a text
//! field that opens the picker in an anchored overlay and validates typed
//! text against a strftime format.
//!
//! All selection logic lives in [`calendar::CalendarState`], which is plain
//! state and usable without a UI runtime:
//!
//! ```
//! use chrono::NaiveDate;
//! use tessera_datetime_picker::calendar::{CalendarState, PickerVariant, TimeUnit};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 1, 20)
//!     .unwrap()
//!     .and_hms_opt(12, 0, 0)
//!     .unwrap();
//! let mut state = CalendarState::new(PickerVariant::Date, None, None, None, now);
//!
//! state.select_day(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! state.select_time(TimeUnit::Hour, 14);
//!
//! let value = state.effective_value().unwrap();
//! assert_eq!(value.to_string(), "2024-01-15 14:00:00");
//! ```

#![deny(missing_docs, clippy::unwrap_used)]

pub mod calendar;
pub mod format;
pub mod input;
pub mod locale;
pub mod picker;
pub mod size;
