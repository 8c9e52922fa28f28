//! Render model derived from a `TodoList`.
//!
//! Front ends draw a `ViewModel` and nothing else; every visibility and
//! enablement rule is decided here.

use tokio::time::Instant;

use crate::filter::Filter;
use crate::list::TodoList;
use crate::notice::ErrorMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub new_todo: NewTodoField,
    pub toggle_all_active: bool,
    pub rows: Vec<Row>,
    /// Hidden while the list is empty.
    pub footer: Option<Footer>,
    pub error: Option<ErrorBanner>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoField {
    pub value: String,
    pub disabled: bool,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u64,
    pub title: String,
    pub completed: bool,
    pub placeholder: bool,
    pub removable: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub items_left: usize,
    pub filter: Filter,
    pub clear_completed_enabled: bool,
}

impl Footer {
    pub fn counter_label(&self) -> String {
        format!("{} items left", self.items_left)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: ErrorMessage,
    pub expires_at: Instant,
}

impl ErrorBanner {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

impl ViewModel {
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn row(&self, id: u64) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id && !row.placeholder)
    }
}

impl TodoList {
    pub fn view(&self) -> ViewModel {
        let mut rows: Vec<Row> = self
            .visible()
            .map(|todo| {
                let pending = self.is_pending(todo.id);
                Row {
                    id: todo.id,
                    title: todo.title.clone(),
                    completed: todo.completed,
                    placeholder: false,
                    removable: !pending,
                    loading: pending,
                }
            })
            .collect();

        if let Some(placeholder) = self.placeholder() {
            rows.push(Row {
                id: placeholder.id,
                title: placeholder.title.clone(),
                completed: placeholder.completed,
                placeholder: true,
                removable: false,
                loading: true,
            });
        }

        let footer = (!self.items().is_empty()).then(|| Footer {
            items_left: self.active_count(),
            filter: self.filter(),
            clear_completed_enabled: self.completed_count() > 0 && !self.is_busy(),
        });

        let error = self
            .notice
            .message()
            .zip(self.notice.expires_at())
            .map(|(message, expires_at)| ErrorBanner {
                message,
                expires_at,
            });

        ViewModel {
            new_todo: NewTodoField {
                value: self.title().to_string(),
                disabled: self.is_busy(),
                focused: self.focus_requested(),
            },
            toggle_all_active: self.all_completed(),
            rows,
            footer,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Todo;

    fn todo(id: u64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("todo {id}"),
            completed,
            user_id: 1,
        }
    }

    fn loaded(items: Vec<Todo>) -> TodoList {
        let mut list = TodoList::new(1);
        list.complete_load(Ok(items));
        list
    }

    #[test]
    fn empty_list_hides_footer() {
        let view = TodoList::new(1).view();
        assert!(view.rows.is_empty());
        assert!(view.footer.is_none());
        assert!(!view.toggle_all_active);
    }

    #[test]
    fn deleting_last_item_hides_footer() {
        let mut list = loaded(vec![todo(1, false)]);
        assert!(list.view().footer.is_some());
        list.begin_delete(1);
        list.complete_delete(1, Ok(()));
        assert!(list.view().footer.is_none());
    }

    #[test]
    fn footer_counts_active_items() {
        let view = loaded(vec![todo(1, false), todo(2, true), todo(3, false)]).view();
        let footer = view.footer.unwrap();
        assert_eq!(footer.items_left, 2);
        assert_eq!(footer.counter_label(), "2 items left");
        assert!(footer.clear_completed_enabled);
    }

    #[test]
    fn clear_completed_disabled_without_completed_items() {
        let footer = loaded(vec![todo(1, false)]).view().footer.unwrap();
        assert!(!footer.clear_completed_enabled);
    }

    #[test]
    fn placeholder_row_is_never_removable() {
        let mut list = loaded(vec![todo(1, true)]);
        list.set_filter(Filter::Completed);
        list.set_title("new");
        list.begin_add().unwrap();

        let view = list.view();
        assert!(view.new_todo.disabled);
        let last = view.rows.last().unwrap();
        assert!(last.placeholder);
        assert_eq!(last.id, 0);
        assert!(!last.removable);
        assert!(last.loading);
        assert!(!view.footer.unwrap().clear_completed_enabled);
    }

    #[test]
    fn deleting_row_shows_loader() {
        let mut list = loaded(vec![todo(1, false), todo(2, false)]);
        list.begin_delete(2);
        let view = list.view();
        let row = view.row(2).unwrap();
        assert!(row.loading);
        assert!(!row.removable);
        assert!(view.row(1).unwrap().removable);
    }

    #[test]
    fn active_filter_row_count_matches_active_items() {
        let mut list = loaded(vec![todo(1, false), todo(2, true), todo(3, true)]);
        list.set_filter(Filter::Active);
        let view = list.view();
        assert_eq!(view.visible_rows().count(), list.active_count());
    }

    #[test]
    fn toggle_all_reflects_completion() {
        assert!(loaded(vec![todo(1, true), todo(2, true)]).view().toggle_all_active);
    }

    #[test]
    fn error_banner_carries_expiry() {
        let mut list = TodoList::new(1);
        list.set_title(" ");
        list.begin_add();
        let banner = list.view().error.unwrap();
        assert_eq!(banner.message, ErrorMessage::EmptyTitle);
        assert!(banner.is_visible_at(Instant::now()));
        assert!(!banner.is_visible_at(banner.expires_at));
    }
}
