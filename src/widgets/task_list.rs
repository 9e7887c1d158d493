//! Task list: owns the task collection and one [`TaskItem`] row per task.
//!
//! Rows report changes through their callbacks into a queue. After each dispatched input the
//! queue is applied to the [`TaskStore`] and the rows are reconciled by [`TaskId`]: surviving rows
//! keep their local edit state, removed rows are dropped, new rows are mounted.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::component::Component;
use crate::core::cursor::CursorPos;
use crate::core::input_event::InputEvent;
use crate::core::keybindings::{match_actions, KeybindingsHandle, TaskAction};
use crate::core::text::utils::truncate_to_width;
use crate::error::TaskError;
use crate::task::{EditTaskPayload, Task, TaskId, TaskStore};
use crate::widgets::task_item::{TaskItem, TaskItemCallbacks, TaskItemTheme};

const SELECTED_PREFIX: &str = "→ ";
const UNSELECTED_PREFIX: &str = "  ";
const EMPTY_PLACEHOLDER: &str = "  No tasks yet";

/// Change requested by a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskEvent {
    ToggleDone(TaskId),
    Remove(TaskId),
    Edit(EditTaskPayload),
}

type EventQueue = Rc<RefCell<Vec<TaskEvent>>>;

pub struct TaskList {
    store: TaskStore,
    items: Vec<TaskItem>,
    selected_index: usize,
    events: EventQueue,
    keybindings: KeybindingsHandle,
    theme: Rc<TaskItemTheme>,
}

impl TaskList {
    pub fn new(keybindings: KeybindingsHandle, theme: Rc<TaskItemTheme>) -> Self {
        Self {
            store: TaskStore::new(),
            items: Vec::new(),
            selected_index: 0,
            events: Rc::new(RefCell::new(Vec::new())),
            keybindings,
            theme,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&TaskItem> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut TaskItem> {
        self.items.get_mut(index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index.min(self.items.len().saturating_sub(1));
    }

    pub fn add_task(&mut self, title: &str) -> Result<TaskId, TaskError> {
        let id = self.store.add(title)?;
        debug!(task_id = %id, "task added");
        self.reconcile();
        Ok(id)
    }

    /// Presses a control by its test id across all rows, then applies the resulting changes.
    pub fn press_test_id(&mut self, test_id: &str) -> bool {
        let pressed = self
            .items
            .iter_mut()
            .any(|item| item.press_test_id(test_id));
        self.flush();
        pressed
    }

    /// Applies queued row events to the store and reconciles rows.
    ///
    /// Row callbacks cannot observe failures, so rejected events are only logged.
    pub fn flush(&mut self) {
        let events: Vec<TaskEvent> = self.events.borrow_mut().drain(..).collect();
        if events.is_empty() {
            return;
        }
        for event in events {
            if let Err(err) = self.apply(event) {
                warn!(error = %err, "task event rejected");
            }
        }
        self.reconcile();
    }

    fn apply(&mut self, event: TaskEvent) -> Result<(), TaskError> {
        match event {
            TaskEvent::ToggleDone(id) => {
                let done = self.store.toggle_done(id)?;
                debug!(task_id = %id, done, "task toggled");
            }
            TaskEvent::Remove(id) => {
                self.store.remove(id)?;
                debug!(task_id = %id, "task removed");
            }
            TaskEvent::Edit(payload) => {
                let id = payload.task_id;
                self.store.edit(payload)?;
                debug!(task_id = %id, "task edited");
            }
        }
        Ok(())
    }

    fn reconcile(&mut self) {
        let mut previous = std::mem::take(&mut self.items);
        let mut next = Vec::with_capacity(self.store.len());

        for (index, task) in self.store.tasks().iter().enumerate() {
            let existing = previous
                .iter()
                .position(|item| item.item().id == task.id)
                .map(|position| previous.swap_remove(position));
            let item = match existing {
                Some(mut item) => {
                    item.set_item(task.clone());
                    item.set_index(index);
                    item
                }
                None => self.mount(task.clone(), index),
            };
            next.push(item);
        }

        self.items = next;
        self.set_selected_index(self.selected_index);
    }

    fn mount(&self, task: Task, index: usize) -> TaskItem {
        let mut item = TaskItem::new(
            task,
            index,
            queue_callbacks(&self.events),
            Arc::clone(&self.keybindings),
        );
        item.set_theme(Rc::clone(&self.theme));
        item
    }

    fn header(&self) -> String {
        match self.store.len() {
            1 => "1 task".to_string(),
            count => format!("{count} tasks"),
        }
    }
}

fn queue_callbacks(events: &EventQueue) -> TaskItemCallbacks {
    let toggle_queue = Rc::clone(events);
    let remove_queue = Rc::clone(events);
    let edit_queue = Rc::clone(events);
    TaskItemCallbacks::new(
        move |id| toggle_queue.borrow_mut().push(TaskEvent::ToggleDone(id)),
        move |id| remove_queue.borrow_mut().push(TaskEvent::Remove(id)),
        move |payload| edit_queue.borrow_mut().push(TaskEvent::Edit(payload)),
    )
}

impl Component for TaskList {
    fn render(&mut self, width: usize) -> Vec<String> {
        let mut lines = vec![truncate_to_width(&self.header(), width, "", true)];
        if self.items.is_empty() {
            lines.push(truncate_to_width(EMPTY_PLACEHOLDER, width, "", true));
            return lines;
        }

        let row_width = width.saturating_sub(SELECTED_PREFIX.chars().count());
        for (index, item) in self.items.iter_mut().enumerate() {
            let prefix = if index == self.selected_index {
                SELECTED_PREFIX
            } else {
                UNSELECTED_PREFIX
            };
            for line in item.render(row_width) {
                lines.push(format!("{prefix}{line}"));
            }
        }
        lines
    }

    fn handle_event(&mut self, event: &InputEvent) {
        let selected_is_editing = self
            .items
            .get(self.selected_index)
            .is_some_and(TaskItem::is_editing);

        if !selected_is_editing {
            if let Some(chord) = event.chord() {
                let [up, down] = match_actions(
                    &self.keybindings,
                    &chord,
                    [TaskAction::SelectUp, TaskAction::SelectDown],
                );
                let count = self.items.len();
                if (up || down) && count > 0 {
                    self.selected_index = if up {
                        (self.selected_index + count - 1) % count
                    } else {
                        (self.selected_index + 1) % count
                    };
                    return;
                }
            }
        }

        if let Some(item) = self.items.get_mut(self.selected_index) {
            item.handle_event(event);
        }
        self.flush();
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let item = self.items.get(self.selected_index)?;
        // One header row above the items, each item one row tall.
        item.cursor_pos()
            .map(|pos| pos.offset(1 + self.selected_index, SELECTED_PREFIX.chars().count()))
    }

    fn invalidate(&mut self) {
        for item in self.items.iter_mut() {
            item.invalidate();
        }
    }
}
