//! Calendar picker component with optional time columns, shortcuts, and
//! confirmation buttons.
//!
//! ## Usage
//!
//! Use to let users pick a date, or a date and time of day, in form and
//! scheduling flows.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};
use derive_setters::Setters;
use tessera_ui::{Color, DimensionValue, Dp, Modifier, State, remember, tessera, use_context};
use tessera_ui_basic_components::{
    alignment::{Alignment, CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    flow_row::{FlowRowArgs, flow_row},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    scrollable::{ScrollableArgs, ScrollableState, scrollable},
    shape_def::Shape,
    spacer::spacer,
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    theme::{MaterialAlpha, MaterialTheme},
};

use crate::{
    calendar::{
        CalendarState, CalendarView, DAY_COLUMNS, DAY_ROWS, NavDirection, PickerVariant, Shortcut,
        TimeUnit, merge_date, with_unit,
    },
    format::{DEFAULT_FORMAT, format_value},
    locale::Locale,
    size::{PickerSize, SizeTokens},
};

const GRID_SPACING: Dp = Dp(2.0);
const SECTION_GAP: Dp = Dp(8.0);
const CELL_RADIUS: Dp = Dp(6.0);
const GRID_ITEMS_PER_LINE: usize = 3;

/// Callback invoked with the formatted string and the structured value.
pub type ChangeHandler = Arc<dyn Fn(String, Option<NaiveDateTime>) + Send + Sync>;

/// Callback invoked with the in-progress value on OK or Cancel.
pub type ConfirmHandler = Arc<dyn Fn(Option<NaiveDateTime>) + Send + Sync>;

/// Configuration options for [`date_picker`].
///
/// Initial-state fields are applied only when `date_picker` owns the state.
#[derive(Clone, Setters)]
pub struct DatePickerArgs {
    /// Optional modifier chain applied to the picker.
    pub modifier: Modifier,
    /// strftime pattern used for formatted output.
    #[setters(into)]
    pub format: String,
    /// Picker variant.
    pub variant: PickerVariant,
    /// Externally controlled value. When set, selection gestures emit the
    /// merged value through `on_change` and leave internal state untouched.
    #[setters(strip_option)]
    pub value: Option<NaiveDateTime>,
    /// Initial value for the internal state.
    #[setters(strip_option)]
    pub default_value: Option<NaiveDateTime>,
    /// Inclusive earliest selectable instant.
    #[setters(strip_option)]
    pub disable_before: Option<NaiveDateTime>,
    /// Inclusive latest selectable instant.
    #[setters(strip_option)]
    pub disable_after: Option<NaiveDateTime>,
    /// Whether the hour/minute/second columns are rendered.
    pub show_time_selector: bool,
    /// Quick-select entries rendered below the grid.
    pub shortcuts: Vec<Shortcut>,
    /// Whether the shortcut list is rendered.
    pub show_shortcuts: bool,
    /// Whether the OK button is rendered.
    pub show_ok_button: bool,
    /// Label of the OK button.
    #[setters(into)]
    pub ok_text: String,
    /// Whether the Cancel button is rendered.
    pub show_cancel_button: bool,
    /// Label of the Cancel button.
    #[setters(into)]
    pub cancel_text: String,
    /// Size preset.
    pub size: PickerSize,
    /// Locale for weekday, month, and prompt labels.
    pub locale: Locale,
    /// Renders every selectable cell disabled.
    pub disabled: bool,
    /// Called once per selection gesture with the formatted string and value.
    #[setters(skip)]
    pub on_change: Option<ChangeHandler>,
    /// Called when the OK button is clicked.
    #[setters(skip)]
    pub on_ok: Option<ConfirmHandler>,
    /// Called when the Cancel button is clicked.
    #[setters(skip)]
    pub on_cancel: Option<ConfirmHandler>,
}

impl Default for DatePickerArgs {
    fn default() -> Self {
        let today = chrono::Local::now()
            .naive_local()
            .date()
            .and_time(chrono::NaiveTime::MIN);
        Self {
            modifier: Modifier::new()
                .constrain(Some(DimensionValue::WRAP), Some(DimensionValue::WRAP)),
            format: DEFAULT_FORMAT.to_string(),
            variant: PickerVariant::Date,
            value: None,
            default_value: None,
            disable_before: None,
            disable_after: None,
            show_time_selector: false,
            shortcuts: vec![Shortcut::new("Today", today).with_format("%m-%d %H:%M")],
            show_shortcuts: false,
            show_ok_button: false,
            ok_text: "OK".to_string(),
            show_cancel_button: false,
            cancel_text: "Cancel".to_string(),
            size: PickerSize::default(),
            locale: Locale::default(),
            disabled: false,
            on_change: None,
            on_ok: None,
            on_cancel: None,
        }
    }
}

impl DatePickerArgs {
    /// Sets the change callback.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(String, Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Sets the change callback using a shared handler.
    pub fn on_change_shared(mut self, f: ChangeHandler) -> Self {
        self.on_change = Some(f);
        self
    }

    /// Sets the OK callback.
    pub fn on_ok<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        self.on_ok = Some(Arc::new(f));
        self
    }

    /// Sets the OK callback using a shared handler.
    pub fn on_ok_shared(mut self, f: ConfirmHandler) -> Self {
        self.on_ok = Some(f);
        self
    }

    /// Sets the Cancel callback.
    pub fn on_cancel<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        self.on_cancel = Some(Arc::new(f));
        self
    }

    /// Sets the Cancel callback using a shared handler.
    pub fn on_cancel_shared(mut self, f: ConfirmHandler) -> Self {
        self.on_cancel = Some(f);
        self
    }
}

/// Shared display configuration threaded through the panel sections.
#[derive(Clone)]
struct PickerEnv {
    tokens: SizeTokens,
    locale: Locale,
    format: String,
    disabled: bool,
}

/// Routes selection gestures to the caller, short-circuiting internal state
/// updates while an external value controls the picker.
#[derive(Clone)]
struct ChangeSink {
    state: State<CalendarState>,
    controlled: Option<NaiveDateTime>,
    format: String,
    on_change: Option<ChangeHandler>,
}

impl ChangeSink {
    fn emit(&self, value: NaiveDateTime) {
        if let Some(on_change) = &self.on_change {
            on_change(format_value(value, &self.format), Some(value));
        }
    }

    fn day_clicked(&self, date: chrono::NaiveDate) {
        if let Some(external) = self.controlled {
            self.emit(merge_date(external, date));
            return;
        }
        self.state.with_mut(|s| s.select_day(date));
        if let Some(value) = self.state.with(|s| s.effective_value()) {
            self.emit(value);
        }
    }

    fn time_clicked(&self, unit: TimeUnit, value: u32) {
        if let Some(external) = self.controlled {
            self.emit(with_unit(external, unit, value));
            return;
        }
        self.state.with_mut(|s| s.select_time(unit, value));
        if let Some(value) = self.state.with(|s| s.effective_value()) {
            self.emit(value);
        }
    }

    fn shortcut_clicked(&self, instant: NaiveDateTime) {
        if self.controlled.is_some() {
            self.emit(instant);
            return;
        }
        self.state.with_mut(|s| s.select_shortcut(instant));
        if let Some(value) = self.state.with(|s| s.effective_value()) {
            self.emit(value);
        }
    }
}

/// # date_picker
///
/// Render a calendar picker for selecting a date, optionally with time-of-day
/// columns, quick-select shortcuts, and OK/Cancel buttons.
///
/// ## Usage
///
/// Use when you need an inline calendar grid for picking a date or instant.
///
/// ## Parameters
///
/// - `args` — configuration for the picker layout and internal state defaults;
///   see [`DatePickerArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_datetime_picker::picker::{DatePickerArgs, date_picker};
///
/// date_picker(
///     DatePickerArgs::default()
///         .show_time_selector(true)
///         .on_change(|formatted, value| {
///             assert_eq!(value.is_some(), !formatted.is_empty());
///         }),
/// );
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_picker(args: impl Into<DatePickerArgs>) {
    let args: DatePickerArgs = args.into();
    let variant = args.variant;
    let disable_before = args.disable_before;
    let disable_after = args.disable_after;
    let initial = args.value.or(args.default_value);

    let state = remember(move || {
        CalendarState::new(
            variant,
            disable_before,
            disable_after,
            initial,
            chrono::Local::now().naive_local(),
        )
    });
    date_picker_with_state(args, state);
}

/// # date_picker_with_state
///
/// Render a calendar picker using an external state handle.
///
/// ## Usage
///
/// Use when you need to observe or drive the selection from outside the
/// component, for example from an enclosing overlay.
///
/// ## Parameters
///
/// - `args` — configuration for the picker layout; see [`DatePickerArgs`].
/// - `state` — a [`CalendarState`] cell owning selection and navigation.
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use chrono::NaiveDate;
/// use tessera_ui::remember;
/// use tessera_datetime_picker::calendar::{CalendarState, PickerVariant};
/// use tessera_datetime_picker::picker::{DatePickerArgs, date_picker_with_state};
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 20)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
/// let state = remember(move || {
///     CalendarState::new(PickerVariant::Date, None, None, None, now)
/// });
/// date_picker_with_state(DatePickerArgs::default(), state);
///
/// state.with_mut(|s| {
///     s.select_day(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
///     assert!(s.effective_value().is_some());
/// });
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_picker_with_state(args: impl Into<DatePickerArgs>, state: State<CalendarState>) {
    let args: DatePickerArgs = args.into();
    if let Some(value) = args.value {
        state.with_mut(|s| s.sync_controlled(value));
    }
    let snapshot = state.with(|s| s.clone());

    let env = PickerEnv {
        tokens: args.size.tokens(),
        locale: args.locale,
        format: args.format.clone(),
        disabled: args.disabled,
    };
    let sink = ChangeSink {
        state,
        controlled: args.value,
        format: args.format,
        on_change: args.on_change,
    };

    let show_time_selector = args.show_time_selector;
    let shortcuts = if args.show_shortcuts {
        args.shortcuts
    } else {
        Vec::new()
    };
    let actions = ActionRowConfig {
        show_ok: args.show_ok_button,
        ok_text: args.ok_text,
        show_cancel: args.show_cancel_button,
        cancel_text: args.cancel_text,
        on_ok: args.on_ok,
        on_cancel: args.on_cancel,
    };

    let time_columns = remember(|| {
        [
            ScrollableState::new(),
            ScrollableState::new(),
            ScrollableState::new(),
        ]
    });

    row(
        RowArgs::default().modifier(args.modifier),
        move |scope| {
            let date_snapshot = snapshot.clone();
            let date_sink = sink.clone();
            let date_env = env.clone();
            scope.child(move || {
                date_panel(date_snapshot, date_sink, date_env, shortcuts, actions);
            });

            if show_time_selector {
                scope.child(|| spacer(Modifier::new().width(SECTION_GAP)));
                let columns = time_columns.with(|c| c.clone());
                scope.child(move || {
                    time_panel(snapshot, sink, env, columns);
                });
            }
        },
    );
}

struct ActionRowConfig {
    show_ok: bool,
    ok_text: String,
    show_cancel: bool,
    cancel_text: String,
    on_ok: Option<ConfirmHandler>,
    on_cancel: Option<ConfirmHandler>,
}

fn date_panel(
    snapshot: CalendarState,
    sink: ChangeSink,
    env: PickerEnv,
    shortcuts: Vec<Shortcut>,
    actions: ActionRowConfig,
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let tokens = env.tokens;
    let has_actions = actions.show_ok || actions.show_cancel;

    surface(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .width(tokens.date_panel_width)
                    .padding_all(tokens.panel_padding),
            )
            .style(SurfaceStyle::Outlined {
                color: scheme.outline_variant,
                width: Dp(1.0),
            })
            .shape(Shape::rounded_rectangle(CELL_RADIUS)),
        move || {
            column(ColumnArgs::default(), move |scope| {
                let header_snapshot = snapshot.clone();
                let header_env = env.clone();
                let header_state = sink.state;
                scope.child(move || {
                    header_row(header_snapshot, header_state, header_env);
                });
                scope.child(|| spacer(Modifier::new().height(SECTION_GAP)));

                let grid_snapshot = snapshot.clone();
                let grid_sink = sink.clone();
                let grid_env = env.clone();
                scope.child(move || match grid_snapshot.view() {
                    CalendarView::Days => days_grid(grid_snapshot, grid_sink, grid_env),
                    CalendarView::Months => months_grid(grid_snapshot, grid_sink.state, grid_env),
                    CalendarView::Years => years_grid(grid_snapshot, grid_sink.state, grid_env),
                });

                if !shortcuts.is_empty() {
                    scope.child(|| spacer(Modifier::new().height(SECTION_GAP)));
                    let shortcut_snapshot = snapshot.clone();
                    let shortcut_sink = sink.clone();
                    let shortcut_env = env.clone();
                    scope.child(move || {
                        shortcuts_section(shortcut_snapshot, shortcut_sink, shortcut_env, shortcuts);
                    });
                }

                if has_actions {
                    scope.child(|| spacer(Modifier::new().height(SECTION_GAP)));
                    scope.child(move || {
                        action_row(snapshot, sink, env, actions);
                    });
                }
            });
        },
    );
}

fn header_row(snapshot: CalendarState, state: State<CalendarState>, env: PickerEnv) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let tokens = env.tokens;
    let view = snapshot.view();
    let variant = snapshot.variant();
    let reference = snapshot.reference_month();
    let decade = snapshot.decade_start();
    let show_nav = !(variant == PickerVariant::Anniversary && view == CalendarView::Months);
    let can_back = snapshot.can_navigate(NavDirection::Back);
    let can_forward = snapshot.can_navigate(NavDirection::Forward);

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .main_axis_alignment(MainAxisAlignment::SpaceBetween)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            if show_nav {
                scope.child(move || {
                    nav_button("<", can_back, tokens.nav_button, move || {
                        state.with_mut(|s| s.navigate(NavDirection::Back));
                    });
                });
            } else {
                scope.child(move || {
                    spacer(Modifier::new().size(tokens.nav_button, tokens.nav_button))
                });
            }

            scope.child(move || {
                row(
                    RowArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
                    move |labels| {
                        match view {
                            CalendarView::Days => {
                                let month_label =
                                    env.locale.month_short(reference.month()).to_string();
                                labels.child(move || {
                                    header_label(month_label, tokens.header_font, true, move || {
                                        state.with_mut(|s| s.set_view(CalendarView::Months));
                                    });
                                });
                                if variant != PickerVariant::Anniversary {
                                    labels.child(|| spacer(Modifier::new().width(Dp(4.0))));
                                    let year_label = reference.year().to_string();
                                    labels.child(move || {
                                        header_label(
                                            year_label,
                                            tokens.header_font,
                                            true,
                                            move || {
                                                state.with_mut(|s| {
                                                    s.set_view(CalendarView::Years)
                                                });
                                            },
                                        );
                                    });
                                }
                            }
                            CalendarView::Months => {
                                let year_label = reference.year().to_string();
                                let clickable = variant != PickerVariant::Anniversary;
                                labels.child(move || {
                                    header_label(
                                        year_label,
                                        tokens.header_font,
                                        clickable,
                                        move || {
                                            if clickable {
                                                state.with_mut(|s| {
                                                    s.set_view(CalendarView::Years)
                                                });
                                            }
                                        },
                                    );
                                });
                            }
                            CalendarView::Years => {
                                let range_label = format!("{}-{}", decade, decade + 9);
                                labels.child(move || {
                                    text(
                                        TextArgs::default()
                                            .text(range_label)
                                            .size(tokens.header_font)
                                            .color(scheme.on_surface),
                                    );
                                });
                            }
                        }
                    },
                );
            });

            if show_nav {
                scope.child(move || {
                    nav_button(">", can_forward, tokens.nav_button, move || {
                        state.with_mut(|s| s.navigate(NavDirection::Forward));
                    });
                });
            } else {
                scope.child(move || {
                    spacer(Modifier::new().size(tokens.nav_button, tokens.nav_button))
                });
            }
        },
    );
}

fn header_label(
    label: String,
    font_size: Dp,
    clickable: bool,
    on_click: impl Fn() + Send + Sync + 'static,
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let mut surface_args = SurfaceArgs::default()
        .modifier(Modifier::new().padding_all(Dp(4.0)))
        .style(Color::TRANSPARENT.into())
        .shape(Shape::rounded_rectangle(Dp(4.0)))
        .content_alignment(Alignment::Center)
        .enabled(clickable);
    if clickable {
        surface_args = surface_args.on_click(on_click);
    }
    surface(surface_args, move || {
        text(
            TextArgs::default()
                .text(label)
                .size(font_size)
                .color(scheme.on_surface),
        );
    });
}

fn days_grid(snapshot: CalendarState, sink: ChangeSink, env: PickerEnv) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let tokens = env.tokens;
    let disabled = env.disabled;
    let today = snapshot.today().date();
    let cells = snapshot.day_cells();
    let selected = snapshot.selected_date();
    let locale = env.locale;

    column(ColumnArgs::default(), move |scope| {
        scope.child(move || {
            flow_row(
                FlowRowArgs::default()
                    .max_items_per_line(DAY_COLUMNS)
                    .item_spacing(GRID_SPACING),
                move |labels| {
                    for index in 0..DAY_COLUMNS {
                        let label = locale.weekday_short(index);
                        labels.child(move || {
                            surface(
                                SurfaceArgs::default()
                                    .modifier(
                                        Modifier::new().size(tokens.cell_width, tokens.cell_height),
                                    )
                                    .style(Color::TRANSPARENT.into())
                                    .content_alignment(Alignment::Center),
                                move || {
                                    text(
                                        TextArgs::default()
                                            .text(label)
                                            .size(tokens.cell_font)
                                            .color(scheme.on_surface_variant),
                                    );
                                },
                            );
                        });
                    }
                },
            );
        });

        scope.child(move || {
            flow_row(
                FlowRowArgs::default()
                    .max_items_per_line(DAY_COLUMNS)
                    .max_lines(DAY_ROWS)
                    .item_spacing(GRID_SPACING)
                    .line_spacing(GRID_SPACING),
                move |grid| {
                    for cell in cells {
                        let snapshot = snapshot.clone();
                        let sink = sink.clone();
                        grid.child(move || {
                            let is_selected = selected == Some(cell.date);
                            let is_today = cell.date == today;
                            let is_enabled = !disabled && !snapshot.is_day_disabled(cell.date);
                            let text_color = if is_selected {
                                scheme.on_primary
                            } else if !is_enabled {
                                scheme
                                    .on_surface_variant
                                    .with_alpha(MaterialAlpha::DISABLED_CONTENT)
                            } else if !cell.in_month {
                                scheme.on_surface_variant
                            } else {
                                scheme.on_surface
                            };
                            let style = if is_selected {
                                SurfaceStyle::Filled {
                                    color: scheme.primary,
                                }
                            } else if is_today {
                                SurfaceStyle::Outlined {
                                    color: scheme.primary,
                                    width: Dp(1.0),
                                }
                            } else {
                                SurfaceStyle::Filled {
                                    color: Color::TRANSPARENT,
                                }
                            };

                            let on_click = if is_enabled {
                                Some(Arc::new(move || {
                                    sink.day_clicked(cell.date);
                                }))
                            } else {
                                None
                            };

                            let mut surface_args = SurfaceArgs::default()
                                .modifier(
                                    Modifier::new().size(tokens.cell_width, tokens.cell_height),
                                )
                                .style(style)
                                .shape(Shape::rounded_rectangle(CELL_RADIUS))
                                .content_alignment(Alignment::Center)
                                .enabled(is_enabled);
                            if let Some(on_click) = on_click {
                                surface_args = surface_args.on_click_shared(on_click);
                            }
                            surface(surface_args, move || {
                                text(
                                    TextArgs::default()
                                        .text(format!("{}", cell.date.day()))
                                        .size(tokens.cell_font)
                                        .color(text_color),
                                );
                            });
                        });
                    }
                },
            );
        });
    });
}

fn months_grid(snapshot: CalendarState, state: State<CalendarState>, env: PickerEnv) {
    let tokens = env.tokens;
    let disabled = env.disabled;
    let year = snapshot.reference_month().year();
    let current_month = snapshot.reference_month().month();
    let locale = env.locale;
    let cell_width = Dp(tokens.cell_width.0 * 2.0 + GRID_SPACING.0 * 2.0);

    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(GRID_ITEMS_PER_LINE)
            .item_spacing(GRID_SPACING)
            .line_spacing(GRID_SPACING),
        move |scope| {
            for month in 1..=12u32 {
                let snapshot = snapshot.clone();
                scope.child(move || {
                    let is_current = month == current_month;
                    let is_enabled = !disabled && !snapshot.is_month_disabled(year, month);
                    grid_cell(
                        locale.month_short(month).to_string(),
                        cell_width,
                        tokens.cell_height,
                        tokens.cell_font,
                        is_current,
                        is_enabled,
                        move || {
                            state.with_mut(|s| s.select_month(year, month));
                        },
                    );
                });
            }
        },
    );
}

fn years_grid(snapshot: CalendarState, state: State<CalendarState>, env: PickerEnv) {
    let tokens = env.tokens;
    let disabled = env.disabled;
    let current_year = snapshot.reference_month().year();
    let cells = snapshot.year_cells();
    let cell_width = Dp(tokens.cell_width.0 * 2.0 + GRID_SPACING.0 * 2.0);

    flow_row(
        FlowRowArgs::default()
            .max_items_per_line(GRID_ITEMS_PER_LINE)
            .item_spacing(GRID_SPACING)
            .line_spacing(GRID_SPACING),
        move |scope| {
            for cell in cells {
                let snapshot = snapshot.clone();
                scope.child(move || {
                    let is_current = cell.year == current_year && !cell.is_padding;
                    let is_enabled =
                        !disabled && !cell.is_padding && !snapshot.is_year_disabled(cell.year);
                    grid_cell(
                        cell.year.to_string(),
                        cell_width,
                        tokens.cell_height,
                        tokens.cell_font,
                        is_current,
                        is_enabled,
                        move || {
                            state.with_mut(|s| s.select_year(cell.year));
                        },
                    );
                });
            }
        },
    );
}

fn grid_cell(
    label: String,
    width: Dp,
    height: Dp,
    font_size: Dp,
    is_current: bool,
    is_enabled: bool,
    on_click: impl Fn() + Send + Sync + 'static,
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let text_color = if is_current {
        scheme.on_primary
    } else if is_enabled {
        scheme.on_surface
    } else {
        scheme
            .on_surface_variant
            .with_alpha(MaterialAlpha::DISABLED_CONTENT)
    };
    let style = if is_current {
        SurfaceStyle::Filled {
            color: scheme.primary,
        }
    } else {
        SurfaceStyle::Filled {
            color: Color::TRANSPARENT,
        }
    };

    let mut surface_args = SurfaceArgs::default()
        .modifier(Modifier::new().size(width, height))
        .style(style)
        .shape(Shape::rounded_rectangle(CELL_RADIUS))
        .content_alignment(Alignment::Center)
        .enabled(is_enabled);
    if is_enabled {
        surface_args = surface_args.on_click(on_click);
    }
    surface(surface_args, move || {
        text(
            TextArgs::default()
                .text(label)
                .size(font_size)
                .color(text_color),
        );
    });
}

fn shortcuts_section(
    snapshot: CalendarState,
    sink: ChangeSink,
    env: PickerEnv,
    shortcuts: Vec<Shortcut>,
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let tokens = env.tokens;
    let disabled = env.disabled;

    column(ColumnArgs::default(), move |scope| {
        for shortcut in shortcuts {
            let snapshot = snapshot.clone();
            let sink = sink.clone();
            let format = shortcut
                .format
                .clone()
                .unwrap_or_else(|| env.format.clone());
            scope.child(move || {
                let instant = shortcut.instant;
                let is_enabled = !disabled && !snapshot.is_shortcut_disabled(instant);
                let label = format!("{} | {}", shortcut.label, format_value(instant, &format));
                let text_color = if is_enabled {
                    scheme.primary
                } else {
                    scheme
                        .on_surface_variant
                        .with_alpha(MaterialAlpha::DISABLED_CONTENT)
                };

                let mut surface_args = SurfaceArgs::default()
                    .modifier(
                        Modifier::new()
                            .fill_max_width()
                            .height(tokens.shortcut_height),
                    )
                    .style(Color::TRANSPARENT.into())
                    .shape(Shape::rounded_rectangle(CELL_RADIUS))
                    .content_alignment(Alignment::Center)
                    .enabled(is_enabled);
                if is_enabled {
                    surface_args = surface_args.on_click(move || {
                        sink.shortcut_clicked(instant);
                    });
                }
                surface(surface_args, move || {
                    text(
                        TextArgs::default()
                            .text(label)
                            .size(tokens.cell_font)
                            .color(text_color),
                    );
                });
            });
        }
    });
}

fn action_row(snapshot: CalendarState, sink: ChangeSink, env: PickerEnv, actions: ActionRowConfig) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let tokens = env.tokens;
    let in_progress = sink.controlled.or(snapshot.effective_value());
    let ok_enabled = !env.disabled && in_progress.is_some();
    let cancel_enabled = !env.disabled;
    let ActionRowConfig {
        show_ok,
        ok_text,
        show_cancel,
        cancel_text,
        on_ok,
        on_cancel,
    } = actions;

    row(
        RowArgs::default()
            .modifier(Modifier::new().fill_max_width())
            .main_axis_alignment(MainAxisAlignment::End)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            if show_cancel {
                scope.child(move || {
                    action_button(
                        cancel_text,
                        tokens.cell_font,
                        cancel_enabled,
                        SurfaceStyle::Outlined {
                            color: scheme.outline_variant,
                            width: Dp(1.0),
                        },
                        scheme.primary,
                        move || {
                            if let Some(on_cancel) = &on_cancel {
                                on_cancel(in_progress);
                            }
                        },
                    );
                });
                scope.child(|| spacer(Modifier::new().width(SECTION_GAP)));
            }

            if show_ok {
                scope.child(move || {
                    action_button(
                        ok_text,
                        tokens.cell_font,
                        ok_enabled,
                        SurfaceStyle::Filled {
                            color: scheme.primary,
                        },
                        scheme.on_primary,
                        move || {
                            if let Some(on_ok) = &on_ok {
                                on_ok(in_progress);
                            }
                        },
                    );
                });
            }
        },
    );
}

fn action_button(
    label: String,
    font_size: Dp,
    enabled: bool,
    style: SurfaceStyle,
    text_color: Color,
    on_click: impl Fn() + Send + Sync + 'static,
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let text_color = if enabled {
        text_color
    } else {
        scheme
            .on_surface_variant
            .with_alpha(MaterialAlpha::DISABLED_CONTENT)
    };
    surface(
        SurfaceArgs::default()
            .modifier(Modifier::new().padding_all(Dp(6.0)))
            .style(style)
            .shape(Shape::capsule())
            .content_alignment(Alignment::Center)
            .enabled(enabled)
            .on_click(move || {
                if enabled {
                    on_click();
                }
            }),
        move || {
            text(
                TextArgs::default()
                    .text(label)
                    .size(font_size)
                    .color(text_color),
            );
        },
    );
}

fn time_panel(
    snapshot: CalendarState,
    sink: ChangeSink,
    env: PickerEnv,
    columns: [ScrollableState; 3],
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let tokens = env.tokens;
    let header = sink
        .controlled
        .or(snapshot.effective_value())
        .map(|value| format_value(value, &env.format))
        .unwrap_or_else(|| env.locale.select_prompt().to_string());
    let unit_labels = env.locale.time_unit_labels();
    let units = [TimeUnit::Hour, TimeUnit::Minute, TimeUnit::Second];

    surface(
        SurfaceArgs::default()
            .modifier(
                Modifier::new()
                    .width(tokens.time_panel_width)
                    .padding_all(tokens.panel_padding),
            )
            .style(SurfaceStyle::Outlined {
                color: scheme.outline_variant,
                width: Dp(1.0),
            })
            .shape(Shape::rounded_rectangle(CELL_RADIUS)),
        move || {
            column(ColumnArgs::default(), move |scope| {
                scope.child(move || {
                    surface(
                        SurfaceArgs::default()
                            .modifier(Modifier::new().fill_max_width().height(tokens.cell_height))
                            .style(Color::TRANSPARENT.into())
                            .content_alignment(Alignment::Center),
                        move || {
                            text(
                                TextArgs::default()
                                    .text(header)
                                    .size(tokens.cell_font)
                                    .color(scheme.on_surface_variant),
                            );
                        },
                    );
                });
                scope.child(|| spacer(Modifier::new().height(SECTION_GAP)));

                scope.child(move || {
                    row(
                        RowArgs::default()
                            .modifier(Modifier::new().fill_max_width())
                            .main_axis_alignment(MainAxisAlignment::SpaceBetween),
                        move |labels| {
                            for label in unit_labels {
                                labels.child(move || {
                                    surface(
                                        SurfaceArgs::default()
                                            .modifier(Modifier::new().size(
                                                tokens.time_cell_width,
                                                tokens.time_cell_height,
                                            ))
                                            .style(Color::TRANSPARENT.into())
                                            .content_alignment(Alignment::Center),
                                        move || {
                                            text(
                                                TextArgs::default()
                                                    .text(label)
                                                    .size(tokens.cell_font)
                                                    .color(scheme.on_surface),
                                            );
                                        },
                                    );
                                });
                            }
                        },
                    );
                });

                scope.child(move || {
                    row(
                        RowArgs::default()
                            .modifier(Modifier::new().fill_max_width())
                            .main_axis_alignment(MainAxisAlignment::SpaceBetween),
                        move |cols| {
                            for (index, unit) in units.into_iter().enumerate() {
                                let snapshot = snapshot.clone();
                                let sink = sink.clone();
                                let column_state = columns[index].clone();
                                cols.child(move || {
                                    time_column(snapshot, sink, env.clone(), unit, column_state);
                                });
                            }
                        },
                    );
                });
            });
        },
    );
}

fn time_column(
    snapshot: CalendarState,
    sink: ChangeSink,
    env: PickerEnv,
    unit: TimeUnit,
    column_state: ScrollableState,
) {
    let tokens = env.tokens;
    scrollable(
        ScrollableArgs {
            height: DimensionValue::Fixed(tokens.time_column_height.into()),
            ..Default::default()
        },
        column_state,
        move || {
            column(ColumnArgs::default(), move |scope| {
                let selected = snapshot.time_fields().get(unit);
                for value in 0..unit.cell_count() {
                    let snapshot = snapshot.clone();
                    let sink = sink.clone();
                    let disabled = env.disabled;
                    scope.child(move || {
                        let is_selected = selected == Some(value);
                        let is_enabled =
                            !disabled && !snapshot.is_time_value_disabled(unit, value);
                        time_cell(
                            value,
                            tokens.time_cell_width,
                            tokens.time_cell_height,
                            tokens.cell_font,
                            is_selected,
                            is_enabled,
                            move || {
                                sink.time_clicked(unit, value);
                            },
                        );
                    });
                }
            });
        },
    );
}

fn time_cell(
    value: u32,
    width: Dp,
    height: Dp,
    font_size: Dp,
    is_selected: bool,
    is_enabled: bool,
    on_click: impl Fn() + Send + Sync + 'static,
) {
    let scheme = use_context::<MaterialTheme>().get().color_scheme;
    let text_color = if is_selected {
        scheme.on_primary
    } else if is_enabled {
        scheme.on_surface
    } else {
        scheme
            .on_surface_variant
            .with_alpha(MaterialAlpha::DISABLED_CONTENT)
    };
    let style = if is_selected {
        SurfaceStyle::Filled {
            color: scheme.primary,
        }
    } else {
        SurfaceStyle::Filled {
            color: Color::TRANSPARENT,
        }
    };

    let mut surface_args = SurfaceArgs::default()
        .modifier(Modifier::new().size(width, height))
        .style(style)
        .shape(Shape::rounded_rectangle(CELL_RADIUS))
        .content_alignment(Alignment::Center)
        .enabled(is_enabled);
    if is_enabled {
        surface_args = surface_args.on_click(on_click);
    }
    surface(surface_args, move || {
        text(
            TextArgs::default()
                .text(format!("{value:02}"))
                .size(font_size)
                .color(text_color),
        );
    });
}
