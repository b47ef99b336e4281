//! Text-input variant of the date picker.
//!
//! ## Usage
//!
//! Use in forms where the value should be typed or picked from a calendar
//! overlay anchored below the field.

use std::sync::Arc;

use chrono::NaiveDateTime;
use derive_setters::Setters;
use tessera_ui::{DimensionValue, Dp, Modifier, State, remember, tessera, use_context};
use tessera_ui_basic_components::{
    alignment::Alignment,
    menus::{MenuAnchor, MenuPlacement, MenuProviderArgsBuilder, MenuState, menu_provider},
    modifier::ModifierExt as _,
    row::{RowArgs, row},
    shape_def::Shape,
    spacer::spacer,
    surface::{SurfaceArgs, SurfaceStyle, surface},
    text::{TextArgs, text},
    text_editor::{TextEditorArgsBuilder, TextEditorController, text_editor_with_controller},
    theme::MaterialTheme,
};
use tracing::debug;

use crate::{
    calendar::CalendarState,
    format::{format_value, parse_value},
    picker::{ChangeHandler, DatePickerArgs, date_picker_with_state},
};

const FIELD_HEIGHT: Dp = Dp(36.0);
const TRIGGER_WIDTH: Dp = Dp(32.0);
const FIELD_GAP: Dp = Dp(4.0);

/// Configuration options for [`date_picker_input`].
#[derive(Clone, Setters)]
pub struct DatePickerInputArgs {
    /// Configuration forwarded to the embedded picker, including the format,
    /// bounds, controlled value, and the `on_change` callback.
    pub picker: DatePickerArgs,
    /// Width of the text field.
    pub field_width: Dp,
    /// Accessible description of the field. Defaults to the format pattern.
    #[setters(strip_option, into)]
    pub placeholder: Option<String>,
    /// Whether empty text clears the value and the overlay offers a Clear
    /// button in place of Cancel.
    pub allow_clear: bool,
    /// Label of the Clear button.
    #[setters(into)]
    pub clear_text: String,
    /// Externally controlled overlay visibility.
    #[setters(strip_option)]
    pub picker_is_open: Option<bool>,
    /// Whether the overlay starts open.
    pub picker_default_is_open: bool,
    /// Called when an edit session starts, with the current value.
    #[setters(skip)]
    pub on_focus: Option<ChangeHandler>,
    /// Called when an edit session commits, with the committed value.
    #[setters(skip)]
    pub on_blur: Option<ChangeHandler>,
    /// Called when the value is cleared.
    #[setters(skip)]
    pub on_clear: Option<ChangeHandler>,
}

impl Default for DatePickerInputArgs {
    fn default() -> Self {
        Self {
            picker: DatePickerArgs::default(),
            field_width: Dp(180.0),
            placeholder: None,
            allow_clear: true,
            clear_text: "Clear".to_string(),
            picker_is_open: None,
            picker_default_is_open: false,
            on_focus: None,
            on_blur: None,
            on_clear: None,
        }
    }
}

impl DatePickerInputArgs {
    /// Sets the focus callback.
    pub fn on_focus<F>(mut self, f: F) -> Self
    where
        F: Fn(String, Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        self.on_focus = Some(Arc::new(f));
        self
    }

    /// Sets the focus callback using a shared handler.
    pub fn on_focus_shared(mut self, f: ChangeHandler) -> Self {
        self.on_focus = Some(f);
        self
    }

    /// Sets the blur callback.
    pub fn on_blur<F>(mut self, f: F) -> Self
    where
        F: Fn(String, Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        self.on_blur = Some(Arc::new(f));
        self
    }

    /// Sets the blur callback using a shared handler.
    pub fn on_blur_shared(mut self, f: ChangeHandler) -> Self {
        self.on_blur = Some(f);
        self
    }

    /// Sets the clear callback.
    pub fn on_clear<F>(mut self, f: F) -> Self
    where
        F: Fn(String, Option<NaiveDateTime>) + Send + Sync + 'static,
    {
        self.on_clear = Some(Arc::new(f));
        self
    }

    /// Sets the clear callback using a shared handler.
    pub fn on_clear_shared(mut self, f: ChangeHandler) -> Self {
        self.on_clear = Some(f);
        self
    }
}

/// Tracks the text field's edit session alongside the committed value.
///
/// `committed` is the last known-good formatted string; `text` is whatever the
/// user has typed since. A pending pair buffers picker changes while the
/// confirmation buttons are enabled.
#[derive(Clone, Default)]
struct InputFieldState {
    text: String,
    committed: String,
    editing: bool,
    pending: Option<(String, Option<NaiveDateTime>)>,
}

/// Callback bundle shared by the field and overlay handlers.
#[derive(Clone)]
struct InputHooks {
    format: String,
    allow_clear: bool,
    confirmation: bool,
    on_change: Option<ChangeHandler>,
    on_focus: Option<ChangeHandler>,
    on_blur: Option<ChangeHandler>,
    on_clear: Option<ChangeHandler>,
}

impl InputHooks {
    fn fire(handler: &Option<ChangeHandler>, formatted: &str, value: Option<NaiveDateTime>) {
        if let Some(handler) = handler {
            handler(formatted.to_string(), value);
        }
    }
}

/// # date_picker_input
///
/// Render a text field with a calendar trigger that opens [`date_picker`]
/// in an anchored overlay.
///
/// Typed text is validated against the picker's format when the edit session
/// commits: parseable text is reformatted and emitted through the picker's
/// `on_change`, anything else reverts to the last committed value, and empty
/// text takes the clear path when `allow_clear` is set.
///
/// [`date_picker`]: crate::picker::date_picker
///
/// ## Parameters
///
/// - `args` — field and overlay configuration; see [`DatePickerInputArgs`].
///
/// ## Examples
///
/// ```
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// use tessera_datetime_picker::input::{DatePickerInputArgs, date_picker_input};
/// use tessera_datetime_picker::picker::DatePickerArgs;
///
/// date_picker_input(
///     DatePickerInputArgs::default()
///         .picker(DatePickerArgs::default().show_time_selector(true).on_change(
///             |formatted, value| {
///                 assert_eq!(value.is_none(), formatted.is_empty());
///             },
///         ))
///         .on_clear(|_, value| assert!(value.is_none())),
/// );
/// # }
/// # component();
/// ```
#[tessera]
pub fn date_picker_input(args: impl Into<DatePickerInputArgs>) {
    let args: DatePickerInputArgs = args.into();
    let picker_args = args.picker;
    let format = picker_args.format.clone();
    let tokens = picker_args.size.tokens();
    let scheme = use_context::<MaterialTheme>().get().color_scheme;

    let hooks = InputHooks {
        format: format.clone(),
        allow_clear: args.allow_clear,
        confirmation: picker_args.show_ok_button,
        on_change: picker_args.on_change.clone(),
        on_focus: args.on_focus,
        on_blur: args.on_blur,
        on_clear: args.on_clear,
    };

    let initial_value = picker_args.value.or(picker_args.default_value);
    let initial_text = initial_value
        .map(|value| format_value(value, &format))
        .unwrap_or_default();

    let field = {
        let initial_text = initial_text.clone();
        remember(move || InputFieldState {
            text: initial_text.clone(),
            committed: initial_text,
            editing: false,
            pending: None,
        })
    };
    let controller = {
        let font_size = tokens.input_font;
        let initial_text = initial_text.clone();
        remember(move || {
            let mut c = TextEditorController::new(font_size, None);
            c.set_text(&initial_text);
            c
        })
    };
    let calendar = {
        let variant = picker_args.variant;
        let not_before = picker_args.disable_before;
        let not_after = picker_args.disable_after;
        remember(move || {
            CalendarState::new(
                variant,
                not_before,
                not_after,
                initial_value,
                chrono::Local::now().naive_local(),
            )
        })
    };
    let field_width = args.field_width;
    let anchor = MenuAnchor::from_dp(
        (Dp(0.0), Dp(0.0)),
        (
            Dp(field_width.0 + FIELD_GAP.0 + TRIGGER_WIDTH.0),
            FIELD_HEIGHT,
        ),
    );
    let menu = {
        let default_open = args.picker_default_is_open;
        let state = remember(move || {
            let menu = MenuState::new();
            if default_open {
                menu.open_at(anchor);
            }
            menu
        });
        state.with(|m| m.clone())
    };

    // Mirror an externally controlled value into the committed text.
    if let Some(value) = picker_args.value {
        let formatted = format_value(value, &format);
        let changed = field.with(|f| f.committed != formatted);
        if changed {
            field.with_mut(|f| {
                f.committed = formatted.clone();
                f.text = formatted.clone();
                f.pending = None;
            });
            controller.with_mut(|c| c.set_text(&formatted));
        }
    }
    if let Some(open) = args.picker_is_open
        && open != menu.is_open()
    {
        if open {
            menu.open_at(anchor);
        } else {
            menu.close();
        }
    }

    let editor_on_change = {
        let hooks = hooks.clone();
        Arc::new(move |new_text: String| -> String {
            let starting = field.with(|f| !f.editing);
            if starting {
                field.with_mut(|f| f.editing = true);
                let committed = field.with(|f| f.committed.clone());
                match parse_value(&committed, &hooks.format) {
                    Some(value) => InputHooks::fire(&hooks.on_focus, &committed, Some(value)),
                    None => InputHooks::fire(&hooks.on_focus, "", None),
                }
            }
            field.with_mut(|f| f.text = new_text.clone());
            new_text
        })
    };

    let inner_picker = overlay_picker_args(
        picker_args,
        &hooks,
        args.clear_text,
        field,
        controller,
        calendar,
        menu.clone(),
    );

    let menu_args = {
        let hooks = hooks.clone();
        MenuProviderArgsBuilder::default()
            .placement(MenuPlacement::BelowStart)
            .width(DimensionValue::WRAP)
            .on_dismiss(Arc::new(move || {
                commit_edit_session(field, controller, calendar, &hooks);
                revert_pending(field, controller);
            }) as Arc<dyn Fn() + Send + Sync>)
            .build()
            .expect("builder construction failed")
    };

    let placeholder = args.placeholder.unwrap_or_else(|| format.clone());
    let trigger_menu = menu.clone();
    let trigger_hooks = hooks.clone();

    menu_provider(
        menu_args,
        menu,
        move || {
            row(RowArgs::default(), move |scope| {
                scope.child(move || {
                    let editor_args = TextEditorArgsBuilder::default()
                        .width(DimensionValue::Fixed(field_width.into()))
                        .font_size(tokens.input_font)
                        .accessibility_label(placeholder)
                        .on_change(editor_on_change as Arc<dyn Fn(String) -> String + Send + Sync>)
                        .build()
                        .expect("builder construction failed");
                    text_editor_with_controller(editor_args, controller);
                });
                scope.child(|| spacer(Modifier::new().width(FIELD_GAP)));
                scope.child(move || {
                    surface(
                        SurfaceArgs::default()
                            .modifier(Modifier::new().size(TRIGGER_WIDTH, FIELD_HEIGHT))
                            .style(SurfaceStyle::Filled {
                                color: scheme.surface_container_low,
                            })
                            .shape(Shape::rounded_rectangle(Dp(6.0)))
                            .content_alignment(Alignment::Center)
                            .on_click(move || {
                                commit_edit_session(field, controller, calendar, &trigger_hooks);
                                if trigger_menu.is_open() {
                                    trigger_menu.close();
                                } else {
                                    trigger_menu.open_at(anchor);
                                }
                            }),
                        move || {
                            text(
                                TextArgs::default()
                                    .text("▾")
                                    .size(tokens.input_font)
                                    .color(scheme.on_surface_variant),
                            );
                        },
                    );
                });
            });
        },
        move |menu_scope| {
            menu_scope.item(move || {
                date_picker_with_state(inner_picker, calendar);
            });
        },
    );
}

/// Builds the overlay picker's configuration: change buffering under
/// confirmation mode, Clear replacing Cancel when `allow_clear` is set, and
/// every action closing the overlay.
fn overlay_picker_args(
    picker_args: DatePickerArgs,
    hooks: &InputHooks,
    clear_text: String,
    field: State<InputFieldState>,
    controller: State<TextEditorController>,
    calendar: State<CalendarState>,
    menu: MenuState,
) -> DatePickerArgs {
    let mut inner = picker_args;
    let allow_clear = hooks.allow_clear;
    let confirmation = hooks.confirmation;

    if allow_clear {
        inner.show_cancel_button = true;
        inner.cancel_text = clear_text;
    }

    inner.on_change = {
        let hooks = hooks.clone();
        Some(Arc::new(
            move |formatted: String, value: Option<NaiveDateTime>| {
                field.with_mut(|f| {
                    f.text = formatted.clone();
                    f.editing = false;
                });
                controller.with_mut(|c| c.set_text(&formatted));
                if confirmation {
                    field.with_mut(|f| f.pending = Some((formatted.clone(), value)));
                } else {
                    field.with_mut(|f| f.committed = formatted.clone());
                    InputHooks::fire(&hooks.on_change, &formatted, value);
                }
            },
        ) as ChangeHandler)
    };

    inner.on_ok = {
        let hooks = hooks.clone();
        let caller_on_ok = inner.on_ok.take();
        let menu = menu.clone();
        Some(Arc::new(move |value: Option<NaiveDateTime>| {
            if let Some((formatted, pending_value)) = field.with(|f| f.pending.clone()) {
                field.with_mut(|f| {
                    f.committed = formatted.clone();
                    f.pending = None;
                });
                InputHooks::fire(&hooks.on_change, &formatted, pending_value);
            }
            if let Some(on_ok) = &caller_on_ok {
                on_ok(value);
            }
            menu.close();
        }))
    };

    inner.on_cancel = {
        let hooks = hooks.clone();
        let caller_on_cancel = inner.on_cancel.take();
        Some(Arc::new(move |value: Option<NaiveDateTime>| {
            if allow_clear {
                clear_value(field, controller, calendar, &hooks);
            } else {
                revert_pending(field, controller);
                if let Some(on_cancel) = &caller_on_cancel {
                    on_cancel(value);
                }
            }
            menu.close();
        }))
    };

    inner
}

/// Drops the selection and empties the field.
fn clear_state(
    field: State<InputFieldState>,
    controller: State<TextEditorController>,
    calendar: State<CalendarState>,
) {
    field.with_mut(|f| {
        f.text.clear();
        f.committed.clear();
        f.editing = false;
        f.pending = None;
    });
    controller.with_mut(|c| c.set_text(""));
    calendar.with_mut(|s| s.clear());
}

/// Drops the selection, empties the field, and notifies the caller.
fn clear_value(
    field: State<InputFieldState>,
    controller: State<TextEditorController>,
    calendar: State<CalendarState>,
    hooks: &InputHooks,
) {
    clear_state(field, controller, calendar);
    InputHooks::fire(&hooks.on_change, "", None);
    InputHooks::fire(&hooks.on_clear, "", None);
}

/// Restores the displayed text to the committed value, discarding any
/// buffered picker change.
fn revert_pending(field: State<InputFieldState>, controller: State<TextEditorController>) {
    let committed = field.with(|f| f.committed.clone());
    let dirty = field.with(|f| f.pending.is_some() || f.text != f.committed);
    if dirty {
        field.with_mut(|f| {
            f.text = committed.clone();
            f.pending = None;
        });
        controller.with_mut(|c| c.set_text(&committed));
    }
}

/// Resolution of an edit session's final text.
#[derive(Debug, Clone, PartialEq)]
enum CommitOutcome {
    /// Empty text with clearing allowed: drop the value.
    Clear,
    /// Unparseable text, or empty text with clearing disallowed: restore the
    /// committed string.
    Revert,
    /// Valid text: commit the reformatted string and parsed value.
    Commit(String, NaiveDateTime),
}

/// Decides what committing `text` does, independent of any widget state.
fn commit_outcome(text: &str, format: &str, allow_clear: bool) -> CommitOutcome {
    if text.is_empty() {
        return if allow_clear {
            CommitOutcome::Clear
        } else {
            CommitOutcome::Revert
        };
    }
    match parse_value(text, format) {
        Some(value) => CommitOutcome::Commit(format_value(value, format), value),
        None => CommitOutcome::Revert,
    }
}

/// Emits the callbacks an outcome owes: clearing fires the
/// `on_change("", None)` / `on_clear("", None)` pair, a revert fires only
/// `on_blur("", None)`, and a commit fires `on_change` and `on_blur` with the
/// reformatted value.
fn fire_commit_hooks(outcome: &CommitOutcome, hooks: &InputHooks) {
    match outcome {
        CommitOutcome::Clear => {
            InputHooks::fire(&hooks.on_change, "", None);
            InputHooks::fire(&hooks.on_clear, "", None);
            InputHooks::fire(&hooks.on_blur, "", None);
        }
        CommitOutcome::Revert => {
            InputHooks::fire(&hooks.on_blur, "", None);
        }
        CommitOutcome::Commit(formatted, value) => {
            InputHooks::fire(&hooks.on_change, formatted, Some(*value));
            InputHooks::fire(&hooks.on_blur, formatted, Some(*value));
        }
    }
}

/// Commits an in-progress edit session: empty text clears (or reverts when
/// clearing is not allowed), unparseable text reverts, and valid text is
/// reformatted and emitted. The decision itself lives in [`commit_outcome`].
fn commit_edit_session(
    field: State<InputFieldState>,
    controller: State<TextEditorController>,
    calendar: State<CalendarState>,
    hooks: &InputHooks,
) {
    let editing = field.with(|f| f.editing);
    if !editing {
        return;
    }
    let text = field.with(|f| f.text.clone());
    field.with_mut(|f| f.editing = false);

    let outcome = commit_outcome(&text, &hooks.format, hooks.allow_clear);
    match &outcome {
        CommitOutcome::Clear => {
            clear_state(field, controller, calendar);
        }
        CommitOutcome::Revert => {
            if !text.is_empty() {
                debug!(text = %text, "unparseable input reverted");
            }
            revert_pending(field, controller);
        }
        CommitOutcome::Commit(formatted, value) => {
            field.with_mut(|f| {
                f.text = formatted.clone();
                f.committed = formatted.clone();
            });
            controller.with_mut(|c| c.set_text(formatted));
            calendar.with_mut(|s| s.set_value(*value));
        }
    }
    fire_commit_hooks(&outcome, hooks);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::NaiveDate;

    use super::*;

    fn counting_hooks() -> (InputHooks, Arc<AtomicUsize>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let changes = Arc::new(AtomicUsize::new(0));
        let clears = Arc::new(AtomicUsize::new(0));
        let blurs = Arc::new(AtomicUsize::new(0));
        let hooks = InputHooks {
            format: "%Y-%m-%d".to_string(),
            allow_clear: true,
            confirmation: false,
            on_change: Some(Arc::new({
                let changes = changes.clone();
                move |_, _| {
                    changes.fetch_add(1, Ordering::SeqCst);
                }
            })),
            on_focus: None,
            on_blur: Some(Arc::new({
                let blurs = blurs.clone();
                move |_, _| {
                    blurs.fetch_add(1, Ordering::SeqCst);
                }
            })),
            on_clear: Some(Arc::new({
                let clears = clears.clone();
                move |_, _| {
                    clears.fetch_add(1, Ordering::SeqCst);
                }
            })),
        };
        (hooks, changes, clears, blurs)
    }

    #[test]
    fn test_empty_text_clears_only_when_allowed() {
        assert_eq!(commit_outcome("", "%Y-%m-%d", true), CommitOutcome::Clear);
        assert_eq!(commit_outcome("", "%Y-%m-%d", false), CommitOutcome::Revert);
    }

    #[test]
    fn test_unparseable_text_reverts() {
        assert_eq!(
            commit_outcome("not a date", "%Y-%m-%d", true),
            CommitOutcome::Revert
        );
        assert_eq!(
            commit_outcome("1970-01-01", "%Y-%m-%d", true),
            CommitOutcome::Revert
        );
    }

    #[test]
    fn test_valid_text_commits_reformatted() {
        let value = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            commit_outcome("2024-1-5", "%Y-%m-%d", true),
            CommitOutcome::Commit("2024-01-05".to_string(), value)
        );
    }

    #[test]
    fn test_clear_fires_change_and_clear_pair() {
        let (hooks, changes, clears, blurs) = counting_hooks();
        fire_commit_hooks(&CommitOutcome::Clear, &hooks);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
        assert_eq!(clears.load(Ordering::SeqCst), 1);
        assert_eq!(blurs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_revert_fires_only_blur() {
        let (hooks, changes, clears, blurs) = counting_hooks();
        fire_commit_hooks(&CommitOutcome::Revert, &hooks);
        assert_eq!(changes.load(Ordering::SeqCst), 0);
        assert_eq!(clears.load(Ordering::SeqCst), 0);
        assert_eq!(blurs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_commit_fires_change_and_blur_with_value() {
        let value = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let seen = Arc::new(AtomicUsize::new(0));
        let hooks = InputHooks {
            format: "%Y-%m-%d".to_string(),
            allow_clear: true,
            confirmation: false,
            on_change: Some(Arc::new({
                let seen = seen.clone();
                move |formatted, parsed| {
                    assert_eq!(formatted, "2024-01-15");
                    assert_eq!(parsed, Some(value));
                    seen.fetch_add(1, Ordering::SeqCst);
                }
            })),
            on_focus: None,
            on_blur: Some(Arc::new({
                let seen = seen.clone();
                move |formatted, parsed| {
                    assert_eq!(formatted, "2024-01-15");
                    assert_eq!(parsed, Some(value));
                    seen.fetch_add(1, Ordering::SeqCst);
                }
            })),
            on_clear: None,
        };
        fire_commit_hooks(
            &CommitOutcome::Commit("2024-01-15".to_string(), value),
            &hooks,
        );
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_fire_tolerates_missing_handlers() {
        let hooks = InputHooks {
            format: "%Y-%m-%d".to_string(),
            allow_clear: true,
            confirmation: false,
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_clear: None,
        };
        fire_commit_hooks(&CommitOutcome::Clear, &hooks);
        fire_commit_hooks(&CommitOutcome::Revert, &hooks);
    }
}
