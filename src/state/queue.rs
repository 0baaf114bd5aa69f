//! Upload queue state machine.
//!
//! Each staged file moves through `pending → uploading → {success |
//! error}`. Editing and removal are allowed only while pending. The
//! whole queue is driven through [`QueueState::apply`], a pure reducer
//! with no rendering or network concern, so the transition rules are
//! testable on their own; the upload component owns the async driving
//! loop. The file handle is a type parameter because the browser `File`
//! object only exists on wasm targets.

use crate::types::MediaType;

/// Per-entry upload progress.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadStatus {
    Pending,
    Uploading,
    Success,
    Error(String),
}

impl UploadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, UploadStatus::Pending)
    }

    /// CSS class for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Pending => "status-pending",
            UploadStatus::Uploading => "status-uploading",
            UploadStatus::Success => "status-success",
            UploadStatus::Error(_) => "status-error",
        }
    }

    /// Portuguese badge label.
    pub fn label(&self) -> &'static str {
        match self {
            UploadStatus::Pending => "Aguardando",
            UploadStatus::Uploading => "Enviando...",
            UploadStatus::Success => "Concluído",
            UploadStatus::Error(_) => "Falhou",
        }
    }
}

/// Editable metadata bundle attached to a staged file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadMeta {
    pub description: String,
    pub genre: String,
    /// Raw comma-separated input; parsed at submit time.
    pub tags_input: String,
}

/// A file staged for upload. Client-side only, never persisted; once
/// its upload succeeds it is superseded by the refreshed gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct QueueEntry<F> {
    pub id: String,
    pub file: F,
    pub filename: String,
    pub media_type: MediaType,
    pub meta: UploadMeta,
    pub status: UploadStatus,
}

/// Synthetic entry id from selection timestamp, index and filename.
pub fn entry_id(now_ms: u64, index: usize, filename: &str) -> String {
    format!("{}-{}-{}", now_ms, index, filename)
}

/// Transitions applied by [`QueueState::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum QueueAction {
    /// User removed a pending entry.
    Remove { id: String },
    SetDescription { id: String, value: String },
    SetGenre { id: String, value: String },
    SetTagsInput { id: String, value: String },
    /// The sequential pass started/finished.
    BeginPass,
    EndPass,
    /// One entry's upload started/resolved.
    Started { id: String },
    Succeeded { id: String },
    Failed { id: String, message: String },
    /// Drop every entry that reached success; errors stay visible.
    ClearSucceeded,
}

/// The whole queue plus the queue-level processing flag.
#[derive(Clone, Debug, PartialEq)]
pub struct QueueState<F> {
    pub entries: Vec<QueueEntry<F>>,
    pub processing: bool,
}

impl<F> Default for QueueState<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            processing: false,
        }
    }
}

impl<F> QueueState<F> {
    pub fn push(&mut self, entry: QueueEntry<F>) {
        self.entries.push(entry);
    }

    /// Ids of pending entries in selection order; the processing pass
    /// walks exactly this list.
    pub fn pending_ids(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.status.is_pending())
            .map(|e| e.id.clone())
            .collect()
    }

    /// The submit action is enabled only with pending work and no pass
    /// in flight.
    pub fn can_submit(&self) -> bool {
        !self.processing && self.entries.iter().any(|e| e.status.is_pending())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: &str) -> Option<&mut QueueEntry<F>> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Apply one transition. Illegal transitions (removing a non-pending
    /// entry, resolving an entry that never started) are ignored.
    pub fn apply(&mut self, action: QueueAction) {
        match action {
            QueueAction::Remove { id } => {
                self.entries.retain(|e| e.id != id || !e.status.is_pending());
            }
            QueueAction::SetDescription { id, value } => {
                if let Some(entry) = self.entry_mut(&id).filter(|e| e.status.is_pending()) {
                    entry.meta.description = value;
                }
            }
            QueueAction::SetGenre { id, value } => {
                if let Some(entry) = self.entry_mut(&id).filter(|e| e.status.is_pending()) {
                    entry.meta.genre = value;
                }
            }
            QueueAction::SetTagsInput { id, value } => {
                if let Some(entry) = self.entry_mut(&id).filter(|e| e.status.is_pending()) {
                    entry.meta.tags_input = value;
                }
            }
            QueueAction::BeginPass => self.processing = true,
            QueueAction::EndPass => self.processing = false,
            QueueAction::Started { id } => {
                if let Some(entry) = self.entry_mut(&id).filter(|e| e.status.is_pending()) {
                    entry.status = UploadStatus::Uploading;
                }
            }
            QueueAction::Succeeded { id } => {
                if let Some(entry) = self
                    .entry_mut(&id)
                    .filter(|e| e.status == UploadStatus::Uploading)
                {
                    entry.status = UploadStatus::Success;
                }
            }
            QueueAction::Failed { id, message } => {
                if let Some(entry) = self
                    .entry_mut(&id)
                    .filter(|e| e.status == UploadStatus::Uploading)
                {
                    entry.status = UploadStatus::Error(message);
                }
            }
            QueueAction::ClearSucceeded => {
                self.entries.retain(|e| e.status != UploadStatus::Success);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, media_type: MediaType) -> QueueEntry<()> {
        QueueEntry {
            id: id.to_string(),
            file: (),
            filename: format!("{}.bin", id),
            media_type,
            meta: UploadMeta::default(),
            status: UploadStatus::Pending,
        }
    }

    fn queue_of(n: usize) -> QueueState<()> {
        let mut queue = QueueState::default();
        for i in 0..n {
            queue.push(entry(&format!("f{}", i), MediaType::Image));
        }
        queue
    }

    #[test]
    fn empty_queue_cannot_submit() {
        let queue: QueueState<()> = QueueState::default();
        assert!(queue.is_empty());
        assert!(!queue.can_submit());
    }

    #[test]
    fn removing_every_entry_disables_submit() {
        let mut queue = queue_of(3);
        assert!(queue.can_submit());
        for id in ["f0", "f1", "f2"] {
            queue.apply(QueueAction::Remove { id: id.into() });
        }
        assert!(queue.is_empty());
        assert!(!queue.can_submit());
    }

    #[test]
    fn sequential_pass_with_one_failure_never_aborts() {
        let mut queue = queue_of(3);
        queue.apply(QueueAction::BeginPass);
        assert!(!queue.can_submit());

        // The driver walks pending ids in selection order.
        let ids = queue.pending_ids();
        assert_eq!(ids, vec!["f0", "f1", "f2"]);

        let mut attempted = 0;
        for id in ids {
            queue.apply(QueueAction::Started { id: id.clone() });
            attempted += 1;
            if id == "f1" {
                queue.apply(QueueAction::Failed {
                    id,
                    message: "disk full".into(),
                });
            } else {
                queue.apply(QueueAction::Succeeded { id });
            }
        }
        queue.apply(QueueAction::EndPass);

        assert_eq!(attempted, 3);
        assert_eq!(queue.entries[0].status, UploadStatus::Success);
        assert_eq!(
            queue.entries[1].status,
            UploadStatus::Error("disk full".into())
        );
        assert_eq!(queue.entries[2].status, UploadStatus::Success);
    }

    #[test]
    fn clear_succeeded_leaves_errors_for_retry() {
        let mut queue = queue_of(2);
        for (id, ok) in [("f0", true), ("f1", false)] {
            queue.apply(QueueAction::Started { id: id.into() });
            if ok {
                queue.apply(QueueAction::Succeeded { id: id.into() });
            } else {
                queue.apply(QueueAction::Failed {
                    id: id.into(),
                    message: "timeout".into(),
                });
            }
        }
        queue.apply(QueueAction::ClearSucceeded);

        assert_eq!(queue.entries.len(), 1);
        assert_eq!(queue.entries[0].id, "f1");
        assert!(matches!(queue.entries[0].status, UploadStatus::Error(_)));
    }

    #[test]
    fn only_pending_entries_accept_edits_and_removal() {
        let mut queue = queue_of(2);
        queue.apply(QueueAction::Started { id: "f0".into() });
        queue.apply(QueueAction::Succeeded { id: "f0".into() });

        queue.apply(QueueAction::SetDescription {
            id: "f0".into(),
            value: "late edit".into(),
        });
        queue.apply(QueueAction::Remove { id: "f0".into() });
        assert_eq!(queue.entries.len(), 2, "non-pending entry must stay");
        assert!(queue.entries[0].meta.description.is_empty());

        queue.apply(QueueAction::SetDescription {
            id: "f1".into(),
            value: "praia".into(),
        });
        queue.apply(QueueAction::SetTagsInput {
            id: "f1".into(),
            value: "sol,mar".into(),
        });
        assert_eq!(queue.entries[1].meta.description, "praia");
        assert_eq!(queue.entries[1].meta.tags_input, "sol,mar");
    }

    #[test]
    fn resolving_an_entry_that_never_started_is_ignored() {
        let mut queue = queue_of(1);
        queue.apply(QueueAction::Succeeded { id: "f0".into() });
        assert_eq!(queue.entries[0].status, UploadStatus::Pending);
    }

    #[test]
    fn entry_ids_embed_timestamp_index_and_filename() {
        assert_eq!(entry_id(1_700_000, 2, "praia.png"), "1700000-2-praia.png");
    }
}
