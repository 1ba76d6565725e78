use crate::model::WasteCategory;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

/// A one-shot, best-effort acknowledgement shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    fn draft(kind: NoticeKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.to_string(),
            description: description.into(),
            kind,
        }
    }

    pub fn classification_complete(category: WasteCategory) -> Self {
        Self::draft(
            NoticeKind::Success,
            "Classification complete!",
            format!("We've identified your waste as {category}"),
        )
    }

    pub fn classification_failed(message: &str) -> Self {
        Self::draft(NoticeKind::Error, "Analysis Failed", message)
    }

    pub fn result_saved() -> Self {
        Self::draft(
            NoticeKind::Success,
            "Result saved!",
            "Classification has been added to your history",
        )
    }

    pub fn copied_to_clipboard() -> Self {
        Self::draft(
            NoticeKind::Success,
            "Copied to clipboard!",
            "Now you can share this result with others",
        )
    }

    pub fn clipboard_failed() -> Self {
        Self::draft(
            NoticeKind::Error,
            "Couldn't copy to clipboard",
            "Your browser blocked clipboard access",
        )
    }

    pub fn assistant_replied() -> Self {
        Self::draft(
            NoticeKind::Info,
            "New Message",
            "EcoSnap Assistant has replied to your question",
        )
    }

    pub fn invalid_file(description: impl Into<String>) -> Self {
        Self::draft(NoticeKind::Error, "Unsupported file", description)
    }
}

/// Bounded stack of visible notices; the oldest is dropped when full.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    max_visible: usize,
    next_id: u64,
    notices: VecDeque<Notice>,
}

impl NoticeBoard {
    pub fn new(max_visible: usize) -> Self {
        Self {
            max_visible: max_visible.max(1),
            next_id: 0,
            notices: VecDeque::new(),
        }
    }

    /// Queues a notice and returns the id it was assigned.
    pub fn push(&mut self, mut notice: Notice) -> u64 {
        self.next_id += 1;
        notice.id = self.next_id;
        if self.notices.len() == self.max_visible {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        before != self.notices.len()
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
