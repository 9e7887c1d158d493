//! Task row widget: completion marker, inline-editable title, edit/cancel and delete controls.
//!
//! The row never mutates its [`Task`]. Every change is reported through [`TaskItemCallbacks`]
//! and becomes visible only when the owner hands back an updated task via
//! [`TaskItem::set_item`].
//!
//! Local state is a two-state edit toggle plus the draft title held by the embedded [`Input`].
//! Focus follows the toggle: after a render that commits a change of `is_editing`, the title field
//! is focused (editing) or blurred (viewing).

use std::rc::Rc;
use std::sync::Arc;

use tracing::debug;

use crate::config::EnvConfig;
use crate::core::component::{Component, Focusable};
use crate::core::cursor::CursorPos;
use crate::core::effect::TransitionEffect;
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{match_actions, KeybindingsHandle, TaskAction};
use crate::core::style::{dim, fg, strikethrough, DIVIDER_GREY, DONE_GREEN, MUTED_GREY, TITLE_GREY};
use crate::core::text::utils::truncate_to_width;
use crate::core::text::width::visible_width;
use crate::task::{EditTaskPayload, Task, TaskId};
use crate::widgets::input::Input;

pub type StyleFn = Box<dyn Fn(&str) -> String>;

/// Notifications sent to the owner of the task collection. Fire-and-forget.
pub struct TaskItemCallbacks {
    pub toggle_task_done: Box<dyn FnMut(TaskId)>,
    pub remove_task: Box<dyn FnMut(TaskId)>,
    pub edit_task: Box<dyn FnMut(EditTaskPayload)>,
}

impl TaskItemCallbacks {
    pub fn new(
        toggle_task_done: impl FnMut(TaskId) + 'static,
        remove_task: impl FnMut(TaskId) + 'static,
        edit_task: impl FnMut(EditTaskPayload) + 'static,
    ) -> Self {
        Self {
            toggle_task_done: Box::new(toggle_task_done),
            remove_task: Box::new(remove_task),
            edit_task: Box::new(edit_task),
        }
    }
}

impl Default for TaskItemCallbacks {
    fn default() -> Self {
        Self::new(|_| {}, |_| {}, |_| {})
    }
}

/// Pressable controls of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    /// The marker + title row; toggles completion.
    Toggle,
    /// Edit affordance while viewing, cancel affordance while editing.
    EditOrCancel,
    /// Delete button; disabled while editing.
    Remove,
}

pub const CONTROLS: [Control; 3] = [Control::Toggle, Control::EditOrCancel, Control::Remove];

/// What the edit/cancel control currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailingAffordance {
    Edit,
    Cancel,
}

pub struct TaskItemTheme {
    pub marker: String,
    pub marker_done: String,
    pub edit: String,
    pub cancel: String,
    pub divider: String,
    pub trash: String,
    pub marker_style: StyleFn,
    pub marker_done_style: StyleFn,
    pub title_style: StyleFn,
    pub title_done_style: StyleFn,
    pub affordance_style: StyleFn,
    pub divider_style: StyleFn,
    pub disabled_style: StyleFn,
}

impl TaskItemTheme {
    /// Unicode glyphs without any colour or decoration.
    pub fn plain() -> Self {
        Self {
            marker: "[ ]".to_string(),
            marker_done: "[✓]".to_string(),
            edit: "✎".to_string(),
            cancel: "✕".to_string(),
            divider: "│".to_string(),
            trash: "⌫".to_string(),
            marker_style: Box::new(str::to_string),
            marker_done_style: Box::new(str::to_string),
            title_style: Box::new(str::to_string),
            title_done_style: Box::new(str::to_string),
            affordance_style: Box::new(str::to_string),
            divider_style: Box::new(str::to_string),
            disabled_style: Box::new(str::to_string),
        }
    }

    /// No colour, but done titles stay struck through and disabled controls dimmed.
    pub fn monochrome() -> Self {
        Self {
            title_done_style: Box::new(strikethrough),
            disabled_style: Box::new(dim),
            ..Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            marker_style: Box::new(|text| fg(text, MUTED_GREY)),
            marker_done_style: Box::new(|text| fg(text, DONE_GREEN)),
            title_style: Box::new(|text| fg(text, TITLE_GREY)),
            title_done_style: Box::new(|text| strikethrough(&fg(text, DONE_GREEN))),
            affordance_style: Box::new(|text| fg(text, MUTED_GREY)),
            divider_style: Box::new(|text| fg(text, DIVIDER_GREY)),
            disabled_style: Box::new(dim),
            ..Self::plain()
        }
    }

    pub fn with_ascii_glyphs(mut self) -> Self {
        self.marker_done = "[x]".to_string();
        self.edit = "edit".to_string();
        self.cancel = "cancel".to_string();
        self.divider = "|".to_string();
        self.trash = "del".to_string();
        self
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        let theme = if config.no_color {
            Self::monochrome()
        } else {
            Self::colored()
        };
        if config.ascii_glyphs {
            theme.with_ascii_glyphs()
        } else {
            theme
        }
    }
}

impl Default for TaskItemTheme {
    fn default() -> Self {
        Self::colored()
    }
}

pub struct TaskItem {
    item: Task,
    index: usize,
    is_editing: bool,
    title_input: Input,
    focus_effect: TransitionEffect<bool>,
    callbacks: TaskItemCallbacks,
    keybindings: KeybindingsHandle,
    theme: Rc<TaskItemTheme>,
    title_col: usize,
}

impl TaskItem {
    pub fn new(
        item: Task,
        index: usize,
        callbacks: TaskItemCallbacks,
        keybindings: KeybindingsHandle,
    ) -> Self {
        let mut title_input = Input::new(Arc::clone(&keybindings));
        title_input.set_value(item.title.clone());
        title_input.set_editable(false);

        let mut task_item = Self {
            item,
            index,
            is_editing: false,
            title_input,
            focus_effect: TransitionEffect::new(),
            callbacks,
            keybindings,
            theme: Rc::new(TaskItemTheme::default()),
            title_col: 0,
        };
        task_item.apply_title_style();
        task_item
    }

    pub fn set_theme(&mut self, theme: Rc<TaskItemTheme>) {
        self.theme = theme;
        self.apply_title_style();
    }

    pub fn item(&self) -> &Task {
        &self.item
    }

    /// Receives the owner's current version of the task. Local edit state is kept.
    pub fn set_item(&mut self, item: Task) {
        self.item = item;
        self.apply_title_style();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn draft_title(&self) -> &str {
        self.title_input.value()
    }

    pub fn is_title_editable(&self) -> bool {
        self.title_input.is_editable()
    }

    pub fn is_title_focused(&self) -> bool {
        self.title_input.is_focused()
    }

    pub fn trailing_affordance(&self) -> TrailingAffordance {
        if self.is_editing {
            TrailingAffordance::Cancel
        } else {
            TrailingAffordance::Edit
        }
    }

    pub fn is_remove_enabled(&self) -> bool {
        !self.is_editing
    }

    pub fn test_id(&self, control: Control) -> String {
        match control {
            Control::Toggle => format!("button-{}", self.index),
            Control::EditOrCancel => format!("edit-{}", self.index),
            Control::Remove => format!("trash-{}", self.index),
        }
    }

    pub fn marker_test_id(&self) -> String {
        format!("marker-{}", self.index)
    }

    pub fn handle_start_editing(&mut self) {
        if self.is_editing {
            return;
        }
        debug!(task_id = %self.item.id, index = self.index, "start editing");
        self.set_editing(true);
    }

    /// Drops the draft and returns to viewing. Repeating it changes nothing.
    pub fn handle_cancel_editing(&mut self) {
        if self.is_editing {
            debug!(task_id = %self.item.id, index = self.index, "cancel editing");
        }
        self.title_input.set_value(self.item.title.clone());
        self.set_editing(false);
    }

    /// Reports the draft as the new title and returns to viewing.
    ///
    /// The draft is sent as typed, including an empty string.
    pub fn handle_submit_editing(&mut self) {
        if !self.is_editing {
            return;
        }
        let payload = EditTaskPayload {
            task_id: self.item.id,
            task_new_title: self.title_input.value().to_string(),
        };
        debug!(task_id = %payload.task_id, title = %payload.task_new_title, "submit edit");
        (self.callbacks.edit_task)(payload);
        self.set_editing(false);
    }

    /// Replaces the draft. Ignored while the title is not editable.
    pub fn change_text(&mut self, text: impl Into<String>) {
        if self.is_editing {
            self.title_input.set_value(text);
        }
    }

    pub fn press(&mut self, control: Control) {
        match control {
            Control::Toggle => {
                debug!(task_id = %self.item.id, "toggle done");
                (self.callbacks.toggle_task_done)(self.item.id);
            }
            Control::EditOrCancel if self.is_editing => self.handle_cancel_editing(),
            Control::EditOrCancel => self.handle_start_editing(),
            Control::Remove if self.is_editing => {
                debug!(task_id = %self.item.id, "remove disabled while editing");
            }
            Control::Remove => {
                debug!(task_id = %self.item.id, "remove");
                (self.callbacks.remove_task)(self.item.id);
            }
        }
    }

    /// Presses the control addressed by `test_id`; returns whether it belongs to this row.
    pub fn press_test_id(&mut self, test_id: &str) -> bool {
        if test_id == self.marker_test_id() {
            self.press(Control::Toggle);
            return true;
        }
        let Some(control) = CONTROLS
            .into_iter()
            .find(|control| self.test_id(*control) == test_id)
        else {
            return false;
        };
        self.press(control);
        true
    }

    fn set_editing(&mut self, editing: bool) {
        self.is_editing = editing;
        self.title_input.set_editable(editing);
    }

    fn apply_title_style(&mut self) {
        let theme = Rc::clone(&self.theme);
        let style: StyleFn = if self.item.done {
            Box::new(move |text| (theme.title_done_style)(text))
        } else {
            Box::new(move |text| (theme.title_style)(text))
        };
        self.title_input.set_text_style(Some(style));
    }

    /// Focuses or blurs the title after a render that changed `is_editing`.
    fn commit_focus_effect(&mut self) -> bool {
        let input = &mut self.title_input;
        self.focus_effect.run(&self.is_editing, |editing| {
            input.set_focused(*editing);
        })
    }

    fn render_row(&mut self, width: usize) -> String {
        let theme = Rc::clone(&self.theme);

        let marker = if self.item.done {
            (theme.marker_done_style)(&theme.marker_done)
        } else {
            (theme.marker_style)(&theme.marker)
        };
        let affordance = match self.trailing_affordance() {
            TrailingAffordance::Edit => (theme.affordance_style)(&theme.edit),
            TrailingAffordance::Cancel => (theme.affordance_style)(&theme.cancel),
        };
        let trash = if self.is_remove_enabled() {
            theme.trash.clone()
        } else {
            (theme.disabled_style)(&theme.trash)
        };
        let trailing = format!("{affordance} {} {trash}", (theme.divider_style)(&theme.divider));

        self.title_col = visible_width(&marker) + 1;
        let title_width = width.saturating_sub(self.title_col + 1 + visible_width(&trailing));
        let title = self
            .title_input
            .render(title_width)
            .into_iter()
            .next()
            .unwrap_or_default();

        truncate_to_width(&format!("{marker} {title} {trailing}"), width, "", true)
    }
}

impl Component for TaskItem {
    fn render(&mut self, width: usize) -> Vec<String> {
        let line = self.render_row(width);
        if self.commit_focus_effect() {
            // Focus changed after commit; draw again so the cursor matches.
            return vec![self.render_row(width)];
        }
        vec![line]
    }

    fn handle_event(&mut self, event: &InputEvent) {
        if self.is_editing {
            if let InputEvent::Key { key_id, .. } = event {
                let [submit, cancel, toggle] = match_actions(
                    &self.keybindings,
                    key_id,
                    [TaskAction::Submit, TaskAction::CancelEditing, TaskAction::ToggleDone],
                );
                if submit {
                    self.handle_submit_editing();
                    return;
                }
                if cancel {
                    self.handle_cancel_editing();
                    return;
                }
                if toggle {
                    self.press(Control::Toggle);
                    return;
                }
            }
            self.title_input.handle_event(event);
            return;
        }

        let Some(chord) = event.chord() else {
            return;
        };
        let [toggle, start_editing, remove] = match_actions(
            &self.keybindings,
            &chord,
            [TaskAction::ToggleDone, TaskAction::StartEditing, TaskAction::Remove],
        );
        if toggle {
            self.press(Control::Toggle);
        } else if start_editing {
            self.handle_start_editing();
        } else if remove {
            self.press(Control::Remove);
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        self.title_input
            .cursor_pos()
            .map(|pos| pos.offset(0, self.title_col))
    }

    fn invalidate(&mut self) {
        self.title_input.invalidate();
    }
}
