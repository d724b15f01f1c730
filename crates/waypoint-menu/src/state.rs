//! Menu states and the choices behind each rendered button.

use waypoint_core::{ServerCategory, ServerEntry};

use crate::form::FormPurpose;

/// Which screen the player is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Nothing rendered yet.
    Idle,
    /// Operator notice shown before the main menu.
    Welcome,
    /// Category picker.
    MainMenu,
    /// Servers of one category.
    ServerList(ServerCategory),
    /// The player's own servers, for editing.
    EditServers,
    /// Edit/delete/back for one custom server.
    ServerOptions(ServerEntry),
    /// Form for a new custom server.
    AddServer,
    /// Form for changing a custom server.
    EditServer(ServerEntry),
    /// Confirmation before deleting a custom server.
    DeleteConfirm(ServerEntry),
    /// Form for a one-off connection.
    DirectConnect,
    /// Session handed off or terminated.
    Finished,
}

/// What a main menu button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MainChoice {
    Category(ServerCategory),
    DirectConnect,
    Disconnect,
}

/// What a server list button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListChoice {
    Connect(ServerEntry),
    EditList,
    Back,
}

/// What an edit list button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditChoice {
    Open(ServerEntry),
    Add,
    Back,
}

/// What a server options button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OptionChoice {
    Edit,
    Delete,
    Back,
}

pub(crate) const OPTION_CHOICES: [OptionChoice; 3] =
    [OptionChoice::Edit, OptionChoice::Delete, OptionChoice::Back];

/// What a delete confirmation button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfirmChoice {
    Yes,
    No,
}

pub(crate) const CONFIRM_CHOICES: [ConfirmChoice; 2] = [ConfirmChoice::Yes, ConfirmChoice::No];

/// The screen awaiting a response, with exactly the choices it was built
/// from.
#[derive(Debug, Clone)]
pub(crate) enum Pending {
    Welcome,
    MainMenu(Vec<MainChoice>),
    ServerList { category: ServerCategory, choices: Vec<ListChoice> },
    EditServers(Vec<EditChoice>),
    ServerOptions(ServerEntry),
    ServerForm { purpose: FormPurpose, leading_labels: usize },
    DeleteConfirm(ServerEntry),
}

impl Pending {
    pub(crate) fn state(&self) -> MenuState {
        match self {
            Self::Welcome => MenuState::Welcome,
            Self::MainMenu(_) => MenuState::MainMenu,
            Self::ServerList { category, .. } => MenuState::ServerList(*category),
            Self::EditServers(_) => MenuState::EditServers,
            Self::ServerOptions(entry) => MenuState::ServerOptions(entry.clone()),
            Self::ServerForm { purpose, .. } => match purpose {
                FormPurpose::Add => MenuState::AddServer,
                FormPurpose::Edit { original, .. } => MenuState::EditServer(original.clone()),
                FormPurpose::DirectConnect => MenuState::DirectConnect,
            },
            Self::DeleteConfirm(entry) => MenuState::DeleteConfirm(entry.clone()),
        }
    }
}

/// A response resolved against the choices of the pending screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selection<C> {
    Chose(C),
    Closed,
    Invalid,
}

/// Resolve an outcome against a rendered choice list.
///
/// Out-of-range indices and form submissions count as invalid.
pub(crate) fn select<C: Clone>(choices: &[C], outcome: crate::Outcome) -> Selection<C> {
    match outcome {
        crate::Outcome::Selected(index) => match choices.get(index) {
            Some(choice) => Selection::Chose(choice.clone()),
            None => Selection::Invalid,
        },
        crate::Outcome::Closed => Selection::Closed,
        crate::Outcome::Submitted(_) | crate::Outcome::Invalid => Selection::Invalid,
    }
}
