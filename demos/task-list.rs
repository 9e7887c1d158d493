//! Line-driven task list session.
//!
//! Each stdin line is one command:
//! - `add:<title>` adds a task
//! - `press:<test-id>` presses a control (`button-0`, `edit-1`, `trash-2`, ...)
//! - `text:<chars>` types text
//! - anything else is a key id (`enter`, `escape`, `up`, `space`, `e`, `ctrl+t`, ...)
//!
//! The list is re-rendered to stdout after every command.
//!
//! ```text
//! printf 'add:buy milk\nadd:walk dog\ne\ntext: and eggs\nenter\ndown\nspace\n' \
//!     | cargo run --example task-list
//! ```

use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tasks_tui::{
    default_keybindings_handle, logging, Component, EnvConfig, InputEvent, LoggingError,
    TaskItemTheme, TaskList,
};
use tracing::warn;

const WIDTH: usize = 48;

fn main() -> io::Result<()> {
    let config = EnvConfig::from_env();
    match logging::init(&config) {
        Ok(()) | Err(LoggingError::AlreadyInstalled) => {}
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let theme = Rc::new(TaskItemTheme::from_config(&config));
    let mut list = TaskList::new(default_keybindings_handle(), theme);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    render(&mut list, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = line.trim_end_matches('\r');
        if command.is_empty() {
            continue;
        }

        if let Some(title) = command.strip_prefix("add:") {
            if let Err(err) = list.add_task(title) {
                warn!(error = %err, "add rejected");
                writeln!(stdout, "! {err}")?;
            }
        } else if let Some(test_id) = command.strip_prefix("press:") {
            if !list.press_test_id(test_id) {
                writeln!(stdout, "! no control {test_id}")?;
            }
        } else if let Some(text) = command.strip_prefix("text:") {
            list.handle_event(&InputEvent::text(text));
        } else {
            list.handle_event(&InputEvent::key(command));
        }

        writeln!(stdout, "> {command}")?;
        render(&mut list, &mut stdout)?;
    }

    Ok(())
}

fn render(list: &mut TaskList, out: &mut impl Write) -> io::Result<()> {
    for line in list.render(WIDTH) {
        writeln!(out, "{line}\x1b[0m")?;
    }
    out.flush()
}
