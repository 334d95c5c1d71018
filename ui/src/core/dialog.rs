//! Keeping a native `<dialog>` in step with the app's open-dialog state.
//!
//! Dialogs are opened with `showModal()` (backdrop, inert page, focus moved
//! inside) rather than the `open` attribute, and a dialog already in the
//! requested state must not be shown or closed again: `showModal()` on an open
//! dialog throws.

use super::drawer::DrawerKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCommand {
    ShowModal,
    Close,
}

/// The call that brings a dialog currently `shown` (or not) to `requested`.
pub fn dialog_command(requested: bool, shown: bool) -> Option<DialogCommand> {
    match (requested, shown) {
        (true, false) => Some(DialogCommand::ShowModal),
        (false, true) => Some(DialogCommand::Close),
        _ => None,
    }
}

/// Whether a `KeyboardEvent.key` value dismisses open dialogs.
pub fn is_dismiss_key(key: &str) -> bool {
    DrawerKey::from_dom(key, false) == DrawerKey::Escape
}
