use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ComposerIntent {
    SetText(String),
    InsertChar(char),
    Backspace,
    SetImage(String),
    SetPendingImage(String),
    PendingInsertChar(char),
    PendingBackspace,
    ToggleImagePanel,
    /// "Add Image": move the pending URL into the image slot.
    AttachImage,
    /// Drop the attached image.
    ClearImage,
    SubmitStarted,
    /// Write confirmed. Resets the draft.
    Posted,
    /// Write failed. Keeps the draft.
    PostFailed,
}

impl Intent for ComposerIntent {}
