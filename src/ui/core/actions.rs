use uuid::Uuid;

/// Which kind of entity an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Category,
    Task,
}

/// Action awaiting a YES/NO answer, with the data captured when it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    DeleteCategory { id: Uuid, name: String },
    DeleteTask { id: Uuid, name: String },
    EditCategory { id: Uuid, name: String },
    EditTask { id: Uuid, name: String },
    ToggleTask { id: Uuid, name: String, completed: bool },
}

impl PendingConfirmation {
    /// Edit target when answering YES opens the edit dialog
    pub fn edit_target(&self) -> Option<(EditTarget, Uuid, &str)> {
        match self {
            PendingConfirmation::EditCategory { id, name } => Some((EditTarget::Category, *id, name)),
            PendingConfirmation::EditTask { id, name } => Some((EditTarget::Task, *id, name)),
            _ => None,
        }
    }

    /// Domain action performed when the user answers YES (edits excluded)
    pub fn confirmed_action(&self) -> Action {
        match self {
            PendingConfirmation::DeleteCategory { id, .. } => Action::DeleteCategory(*id),
            PendingConfirmation::DeleteTask { id, .. } => Action::DeleteTask(*id),
            PendingConfirmation::ToggleTask { id, .. } => Action::ToggleTask(*id),
            PendingConfirmation::EditCategory { .. } | PendingConfirmation::EditTask { .. } => Action::None,
        }
    }
}

/// An edit dialog in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingSession {
    pub target: EditTarget,
    pub target_id: Uuid,
    pub original_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    OpenCategory { id: Uuid, name: String },
    BackToCategories,

    // Category operations
    CreateCategory { name: String },
    RenameCategory { id: Uuid, name: String },
    DeleteCategory(Uuid),

    // Task operations
    CreateTask { category_id: Uuid, name: String },
    RenameTask { id: Uuid, name: String },
    ToggleTask(Uuid),
    DeleteTask(Uuid),

    // Modal
    RequestConfirmation(PendingConfirmation),

    // App control
    Quit,
    None,
}
