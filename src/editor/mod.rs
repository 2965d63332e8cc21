//! Active editor state.
//!
//! One tagged value tracks which create/edit dialog is open, instead of a
//! boolean-plus-form-data pair per entity type.

use crate::models::EntityId;

/// Every entity type an editor dialog can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Program,
    Year,
    Branch,
    Section,
    Student,
    Block,
    Floor,
    Room,
    Subject,
    Invigilator,
    Exam,
}

/// Which editor dialog, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Creating {
        entity: EntityKind,
    },
    Editing {
        entity: EntityKind,
        id: EntityId,
    },
}

impl EditorState {
    pub fn open_create(entity: EntityKind) -> Self {
        EditorState::Creating { entity }
    }

    pub fn open_edit(entity: EntityKind, id: EntityId) -> Self {
        EditorState::Editing { entity, id }
    }

    pub fn close(&mut self) {
        *self = EditorState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditorState::Closed)
    }

    /// The id being edited, when an existing record is open.
    pub fn editing_id(&self, entity: EntityKind) -> Option<EntityId> {
        match self {
            EditorState::Editing { entity: open, id } if *open == entity => Some(*id),
            _ => None,
        }
    }

    /// True when a dialog for this entity type is open (creating or editing).
    pub fn targets(&self, entity: EntityKind) -> bool {
        match self {
            EditorState::Closed => false,
            EditorState::Creating { entity: open } | EditorState::Editing { entity: open, .. } => {
                *open == entity
            }
        }
    }
}
