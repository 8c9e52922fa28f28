//! Plain-text rendering of a `ViewModel`.

use std::fmt;

use todo_core::{Filter, Row, ViewModel};
use tokio::time::Instant;

pub fn render(view: &ViewModel, now: Instant) -> String {
    Screen { view, now }.to_string()
}

/// One frame: the view as it looks at `now`.
struct Screen<'a> {
    view: &'a ViewModel,
    now: Instant,
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view;
        writeln!(f, "todos")?;

        let toggle = if view.toggle_all_active { "[v]" } else { "[ ]" };
        let input = if view.new_todo.value.is_empty() {
            "What needs to be done?"
        } else {
            view.new_todo.value.as_str()
        };
        let state = if view.new_todo.disabled { " (saving...)" } else { "" };
        writeln!(f, "{toggle} {input}{state}")?;

        for row in &view.rows {
            writeln!(f, "{}", render_row(row))?;
        }

        if let Some(footer) = &view.footer {
            let filters: Vec<String> = Filter::ALL
                .into_iter()
                .map(|filter| {
                    if filter == footer.filter {
                        format!("[{}]", filter.label())
                    } else {
                        filter.label().to_string()
                    }
                })
                .collect();
            let clear = if footer.clear_completed_enabled {
                " | clear completed"
            } else {
                ""
            };
            writeln!(f, "{} | {}{clear}", footer.counter_label(), filters.join(" "))?;
        }

        if let Some(banner) = view.error.as_ref().filter(|banner| banner.is_visible_at(self.now)) {
            writeln!(f, "! {}", banner.message)?;
        }
        Ok(())
    }
}

fn render_row(row: &Row) -> String {
    let status = if row.completed { "[x]" } else { "[ ]" };
    let id = if row.placeholder {
        "-".to_string()
    } else {
        row.id.to_string()
    };
    let mut line = format!("  {status} {id:>4}  {}", row.title);
    if row.loading {
        line.push_str("  ...");
    }
    line
}
