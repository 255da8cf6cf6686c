// src/page/comment.rs
// View state of one comment: body visibility, action menu, block notice

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::CommentRecord;
use crate::services::content_filter::FilterResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Commands a reader can issue on a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentAction {
    Show,
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub name: String,
    pub action: CommentAction,
}

/// The gear menu attached to a comment. Starts collapsed.
#[derive(Debug, Clone, Default)]
pub struct ActionMenu {
    expanded: bool,
    entries: Vec<MenuEntry>,
}

impl ActionMenu {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }
}

/// Note placed under a blocked comment, with its `[Show]`/`[Hide]` links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNotice {
    pub reason: String,
    pub show_control: Visibility,
    pub hide_control: Visibility,
}

#[derive(Debug, Clone)]
pub struct PageComment {
    id: Uuid,
    record: CommentRecord,
    body: Visibility,
    menu: Option<ActionMenu>,
    notice: Option<BlockNotice>,
}

impl PageComment {
    pub fn new(record: CommentRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            record,
            body: Visibility::Shown,
            menu: None,
            notice: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn record(&self) -> &CommentRecord {
        &self.record
    }

    pub fn body(&self) -> Visibility {
        self.body
    }

    pub fn menu(&self) -> Option<&ActionMenu> {
        self.menu.as_ref()
    }

    pub fn notice(&self) -> Option<&BlockNotice> {
        self.notice.as_ref()
    }

    /// Attach the action menu unless the comment already has one.
    pub fn add_menu(&mut self) {
        if self.menu.is_none() {
            self.menu = Some(ActionMenu::default());
        }
    }

    pub fn add_action(&mut self, name: &str, action: CommentAction) {
        self.menu
            .get_or_insert_with(ActionMenu::default)
            .entries
            .push(MenuEntry {
                name: name.to_string(),
                action,
            });
    }

    pub fn toggle_menu(&mut self) {
        if let Some(menu) = self.menu.as_mut() {
            menu.expanded = !menu.expanded;
        }
    }

    /// Run the menu entry called `name`. Returns false if there is none.
    pub fn activate(&mut self, name: &str) -> bool {
        let action = self
            .menu
            .as_ref()
            .and_then(|menu| menu.entries.iter().find(|entry| entry.name == name))
            .map(|entry| entry.action);

        match action {
            Some(action) => {
                self.perform(action);
                true
            }
            None => false,
        }
    }

    pub fn hide(&mut self) {
        self.body = Visibility::Hidden;
    }

    pub fn show(&mut self) {
        self.body = Visibility::Shown;
    }

    /// Hide a blocked comment and explain why. Unblocked results are ignored.
    pub fn block(&mut self, result: &FilterResult) {
        let Some(reason) = result.reason() else {
            return;
        };

        self.hide();
        self.notice = Some(BlockNotice {
            reason,
            show_control: Visibility::Shown,
            hide_control: Visibility::Hidden,
        });
    }

    pub fn perform(&mut self, action: CommentAction) {
        match action {
            CommentAction::Show => {
                self.show();
                if let Some(notice) = self.notice.as_mut() {
                    notice.show_control = Visibility::Hidden;
                    notice.hide_control = Visibility::Shown;
                }
            }
            CommentAction::Hide => {
                self.hide();
                if let Some(notice) = self.notice.as_mut() {
                    notice.show_control = Visibility::Shown;
                    notice.hide_control = Visibility::Hidden;
                }
            }
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.notice.is_some()
    }
}
