//! Menu state machine.
//!
//! This module defines the [`Menu`], which manages one player's navigation
//! through server lists and forms, decoupled from how screens reach the
//! player.
//!
//! It consumes [`Outcome`]s and produces [`MenuAction`]s for the runtime to
//! execute. Every rendered screen is stored together with the exact list of
//! choices it was built from, so a button index always means what the player
//! saw, even if the custom server list changed in between.
//!
//! The only side effects are writes to the [`CustomServerStore`].

use std::sync::Arc;

use waypoint_core::{CustomServerStore, PlayerId, ServerCategory, ServerDirectory, ServerEntry};
use waypoint_lang::MessageCatalog;

use crate::{
    Features, FormField, MenuAction, MenuError, MenuState, Outcome, Screen,
    action::DISCONNECT_REASON,
    form::{FormPurpose, ServerForm},
    state::{
        CONFIRM_CHOICES, ConfirmChoice, EditChoice, ListChoice, MainChoice, OPTION_CHOICES,
        OptionChoice, Pending, Selection, select,
    },
};

type Actions = Result<Vec<MenuAction>, MenuError>;

/// Per-session menu state machine.
///
/// One instance per connected player, owned by that session's task and
/// dropped when the session ends.
pub struct Menu<D, S>
where
    D: ServerDirectory,
    S: CustomServerStore,
{
    player: PlayerId,
    catalog: Arc<MessageCatalog>,
    directory: D,
    store: S,
    features: Features,
    /// Notice shown before the main menu. `None` if there is nothing to show.
    welcome: Option<String>,
    /// Screen awaiting a response. `None` before start and after finish.
    pending: Option<Pending>,
    finished: bool,
}

impl<D, S> Menu<D, S>
where
    D: ServerDirectory,
    S: CustomServerStore,
{
    /// Create a menu for `player`.
    pub fn new(
        player: PlayerId,
        catalog: Arc<MessageCatalog>,
        directory: D,
        store: S,
        features: Features,
    ) -> Self {
        Self { player, catalog, directory, store, features, welcome: None, pending: None, finished: false }
    }

    /// Show `notice` before the main menu. Blank notices are skipped.
    #[must_use]
    pub fn with_welcome(mut self, notice: impl Into<String>) -> Self {
        let notice = notice.into();
        self.welcome = if notice.trim().is_empty() { None } else { Some(notice) };
        self
    }

    /// Player this menu belongs to.
    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    /// Current screen.
    pub fn state(&self) -> MenuState {
        if self.finished {
            return MenuState::Finished;
        }
        self.pending.as_ref().map_or(MenuState::Idle, Pending::state)
    }

    /// Session has been handed off or terminated.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Render the first screen.
    ///
    /// Returns no actions if the menu was already started.
    pub fn start(&mut self) -> Actions {
        if self.finished || self.pending.is_some() {
            tracing::warn!(player = %self.player, "Menu already started");
            return Ok(vec![]);
        }

        match self.welcome.clone() {
            Some(notice) => Ok(self.show_welcome(notice)),
            None => Ok(self.show_main_menu()),
        }
    }

    /// Process the response to the pending screen and return actions.
    ///
    /// Returns no actions if no screen is pending (not started or finished).
    pub fn handle(&mut self, outcome: Outcome) -> Actions {
        let Some(pending) = self.pending.take() else {
            tracing::warn!(player = %self.player, ?outcome, "Outcome with no pending screen");
            return Ok(vec![]);
        };
        tracing::debug!(player = %self.player, state = ?pending.state(), ?outcome, "Handling outcome");

        match pending {
            Pending::Welcome => Ok(self.show_main_menu()),
            Pending::MainMenu(choices) => self.on_main_menu(select(&choices, outcome)),
            Pending::ServerList { category, choices } => {
                self.on_server_list(category, select(&choices, outcome))
            },
            Pending::EditServers(choices) => self.on_edit_servers(select(&choices, outcome)),
            Pending::ServerOptions(entry) => self.on_server_options(entry, select(&OPTION_CHOICES, outcome)),
            Pending::ServerForm { purpose, leading_labels } => {
                self.on_server_form(purpose, leading_labels, outcome)
            },
            Pending::DeleteConfirm(entry) => self.on_delete_confirm(entry, select(&CONFIRM_CHOICES, outcome)),
        }
    }

    fn on_main_menu(&mut self, selection: Selection<MainChoice>) -> Actions {
        match selection {
            Selection::Chose(MainChoice::Category(category)) => self.show_server_list(category),
            Selection::Chose(MainChoice::DirectConnect) => {
                Ok(self.show_server_form(FormPurpose::DirectConnect, &ServerForm::blank(), None))
            },
            Selection::Chose(MainChoice::Disconnect) | Selection::Invalid => Ok(self.disconnect()),
            Selection::Closed => Ok(self.show_main_menu()),
        }
    }

    fn on_server_list(&mut self, category: ServerCategory, selection: Selection<ListChoice>) -> Actions {
        match selection {
            Selection::Chose(ListChoice::Connect(entry)) => Ok(self.connect(entry)),
            Selection::Chose(ListChoice::EditList) => self.show_edit_servers(),
            Selection::Chose(ListChoice::Back) | Selection::Closed | Selection::Invalid => {
                tracing::trace!(player = %self.player, %category, "Leaving server list");
                Ok(self.show_main_menu())
            },
        }
    }

    fn on_edit_servers(&mut self, selection: Selection<EditChoice>) -> Actions {
        match selection {
            Selection::Chose(EditChoice::Open(entry)) => Ok(self.show_server_options(entry)),
            Selection::Chose(EditChoice::Add) => {
                Ok(self.show_server_form(FormPurpose::Add, &ServerForm::blank(), None))
            },
            Selection::Chose(EditChoice::Back) | Selection::Closed | Selection::Invalid => {
                self.show_server_list(ServerCategory::Custom)
            },
        }
    }

    fn on_server_options(&mut self, entry: ServerEntry, selection: Selection<OptionChoice>) -> Actions {
        match selection {
            Selection::Chose(OptionChoice::Edit) => {
                let index = self.store.index_of(&self.player, &entry)?;
                let form = ServerForm::from_entry(&entry);
                Ok(self.show_server_form(FormPurpose::Edit { original: entry, index }, &form, None))
            },
            Selection::Chose(OptionChoice::Delete) => Ok(self.show_delete_confirm(entry)),
            Selection::Chose(OptionChoice::Back) | Selection::Closed | Selection::Invalid => {
                self.show_edit_servers()
            },
        }
    }

    fn on_server_form(&mut self, purpose: FormPurpose, leading_labels: usize, outcome: Outcome) -> Actions {
        let form = match outcome {
            Outcome::Submitted(values) => ServerForm::from_submission(&values, leading_labels),
            Outcome::Selected(_) | Outcome::Closed | Outcome::Invalid => None,
        };
        let Some(form) = form else {
            return self.leave_server_form(purpose);
        };

        let entry = match form.to_entry() {
            Ok(entry) => entry,
            Err(rejected) => {
                tracing::debug!(player = %self.player, port = %rejected, "Rejected server form port");
                return Ok(self.show_server_form(purpose, &form, Some(&rejected)));
            },
        };

        match purpose {
            FormPurpose::Add => {
                self.store.add(&self.player, entry.clone())?;
                tracing::info!(player = %self.player, server = %entry, "Added custom server");
                self.show_edit_servers()
            },
            FormPurpose::Edit { original, index } => {
                match index {
                    Some(index) => self.store.update(&self.player, index, entry.clone())?,
                    None => {
                        tracing::warn!(
                            player = %self.player,
                            server = %original,
                            "Edited server was not in the list, appending"
                        );
                        self.store.add(&self.player, entry.clone())?;
                    },
                }
                tracing::info!(player = %self.player, from = %original, to = %entry, "Edited custom server");
                Ok(self.show_server_options(entry))
            },
            FormPurpose::DirectConnect => Ok(self.connect(entry)),
        }
    }

    fn leave_server_form(&mut self, purpose: FormPurpose) -> Actions {
        match purpose {
            FormPurpose::Add => self.show_edit_servers(),
            FormPurpose::Edit { original, .. } => Ok(self.show_server_options(original)),
            FormPurpose::DirectConnect => Ok(self.show_main_menu()),
        }
    }

    fn on_delete_confirm(&mut self, entry: ServerEntry, selection: Selection<ConfirmChoice>) -> Actions {
        match selection {
            Selection::Chose(ConfirmChoice::Yes) => {
                if self.store.remove(&self.player, &entry)? {
                    tracing::info!(player = %self.player, server = %entry, "Deleted custom server");
                } else {
                    tracing::debug!(player = %self.player, server = %entry, "Deleted server was already gone");
                }
                self.show_edit_servers()
            },
            Selection::Chose(ConfirmChoice::No) => self.show_edit_servers(),
            Selection::Closed | Selection::Invalid => Ok(self.show_server_options(entry)),
        }
    }

    fn show(&mut self, pending: Pending, screen: Screen) -> Vec<MenuAction> {
        tracing::trace!(player = %self.player, state = ?pending.state(), title = %screen.title, "Rendering screen");
        self.pending = Some(pending);
        vec![MenuAction::Show(screen)]
    }

    fn show_welcome(&mut self, notice: String) -> Vec<MenuAction> {
        let screen = Screen::custom(self.text("ui.title.notice")).field(FormField::Label { text: notice });
        self.show(Pending::Welcome, screen)
    }

    fn show_main_menu(&mut self) -> Vec<MenuAction> {
        let mut choices = vec![
            MainChoice::Category(ServerCategory::Official),
            MainChoice::Category(ServerCategory::Geyser),
        ];
        if self.features.custom_servers_enabled() {
            choices.push(MainChoice::Category(ServerCategory::Custom));
            choices.push(MainChoice::DirectConnect);
        }
        choices.push(MainChoice::Disconnect);

        let screen = choices.iter().fold(Screen::simple(self.text("ui.title.main_menu")), |screen, choice| {
            let key = match choice {
                MainChoice::Category(ServerCategory::Official) => "ui.button.official_servers",
                MainChoice::Category(ServerCategory::Geyser) => "ui.button.geyser_servers",
                MainChoice::Category(ServerCategory::Custom) => "ui.button.custom_servers",
                MainChoice::DirectConnect => "ui.button.direct_connect",
                MainChoice::Disconnect => "ui.button.disconnect",
            };
            screen.button(self.text(key), None)
        });
        self.show(Pending::MainMenu(choices), screen)
    }

    fn show_server_list(&mut self, category: ServerCategory) -> Actions {
        let servers = match category {
            ServerCategory::Custom => self.store.get(&self.player)?,
            ServerCategory::Official | ServerCategory::Geyser => self.directory.list_by_category(category),
        };

        let mut screen = Screen::simple(self.catalog.resolve_formatted("ui.title.servers", &[&category.title()]));
        let mut choices = Vec::with_capacity(servers.len() + 2);
        for server in servers {
            screen = screen.button(server.title(), server.icon().cloned());
            choices.push(ListChoice::Connect(server));
        }
        if category == ServerCategory::Custom {
            screen = screen.button(self.text("ui.button.edit_servers"), None);
            choices.push(ListChoice::EditList);
        }
        screen = screen.button(self.text("ui.button.back"), None);
        choices.push(ListChoice::Back);

        Ok(self.show(Pending::ServerList { category, choices }, screen))
    }

    fn show_edit_servers(&mut self) -> Actions {
        let servers = self.store.get(&self.player)?;

        let mut screen =
            Screen::simple(self.text("ui.title.edit_servers")).with_body(self.text("ui.content.edit_servers"));
        let mut choices = Vec::with_capacity(servers.len() + 2);
        for server in servers {
            screen = screen.button(server.title(), server.icon().cloned());
            choices.push(EditChoice::Open(server));
        }
        screen = screen
            .button(self.text("ui.button.add_server"), None)
            .button(self.text("ui.button.back"), None);
        choices.extend([EditChoice::Add, EditChoice::Back]);

        Ok(self.show(Pending::EditServers(choices), screen))
    }

    fn show_server_options(&mut self, entry: ServerEntry) -> Vec<MenuAction> {
        let screen = OPTION_CHOICES.iter().fold(
            Screen::simple(self.text("ui.title.server_options")).with_body(entry.title()),
            |screen, choice| {
                let key = match choice {
                    OptionChoice::Edit => "ui.button.edit_server",
                    OptionChoice::Delete => "ui.button.delete_server",
                    OptionChoice::Back => "ui.button.back",
                };
                screen.button(self.text(key), None)
            },
        );
        self.show(Pending::ServerOptions(entry), screen)
    }

    /// Render a server form prefilled with `form`. `rejected_port` adds an
    /// error label above the inputs.
    fn show_server_form(
        &mut self,
        purpose: FormPurpose,
        form: &ServerForm,
        rejected_port: Option<&str>,
    ) -> Vec<MenuAction> {
        let title_key = match purpose {
            FormPurpose::Add => "ui.title.add_server",
            FormPurpose::Edit { .. } => "ui.title.edit_server",
            FormPurpose::DirectConnect => "ui.title.direct_connect",
        };

        let mut screen = Screen::custom(self.text(title_key));
        let mut leading_labels = 0;
        if let Some(rejected) = rejected_port {
            let text = self.catalog.resolve_formatted("ui.error.invalid_port", &[&rejected]);
            screen = screen.field(FormField::Label { text });
            leading_labels += 1;
        }
        let screen = screen
            .field(FormField::Input {
                label: self.text("ui.label.ip"),
                placeholder: form.address.clone(),
                default: form.address.clone(),
            })
            .field(FormField::Input {
                label: self.text("ui.label.port"),
                placeholder: form.port.clone(),
                default: form.port.clone(),
            })
            .field(FormField::Toggle { label: self.text("ui.label.online_mode"), default: form.online_mode })
            .field(FormField::Toggle { label: self.text("ui.label.bedrock_server"), default: form.bedrock });

        self.show(Pending::ServerForm { purpose, leading_labels }, screen)
    }

    fn show_delete_confirm(&mut self, entry: ServerEntry) -> Vec<MenuAction> {
        let screen = Screen::modal(
            self.text("ui.title.delete_server"),
            self.catalog.resolve_formatted("ui.content.delete_server", &[&entry.title()]),
            self.text("ui.button.yes"),
            self.text("ui.button.no"),
        );
        self.show(Pending::DeleteConfirm(entry), screen)
    }

    fn connect(&mut self, entry: ServerEntry) -> Vec<MenuAction> {
        tracing::info!(player = %self.player, server = %entry, "Handing off to server");
        self.finished = true;
        vec![MenuAction::Connect(entry)]
    }

    fn disconnect(&mut self) -> Vec<MenuAction> {
        tracing::info!(player = %self.player, "Player left through the menu");
        self.finished = true;
        vec![MenuAction::Disconnect { reason: DISCONNECT_REASON.to_string() }]
    }

    fn text(&self, key: &str) -> String {
        self.catalog.resolve(key)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use waypoint_core::{MemoryStore, StaticDirectory};

    use super::*;
    use crate::FieldValue;

    fn menu(custom_servers: bool) -> Menu<StaticDirectory, MemoryStore> {
        let directory = StaticDirectory::new(vec![
            ServerEntry::new("Hive", "geo.hivebedrock.network", 19132, ServerCategory::Official),
            ServerEntry::new("Lobby", "lobby.example.net", 25565, ServerCategory::Geyser),
        ]);
        Menu::new(
            PlayerId::new("steve"),
            Arc::new(MessageCatalog::in_memory()),
            directory,
            MemoryStore::new(),
            Features::new(custom_servers),
        )
    }

    /// Accept every default. Labels submit as [`FieldValue::Empty`].
    fn filled(form: &Screen) -> Vec<FieldValue> {
        form.fields()
            .iter()
            .map(|field| match field {
                FormField::Label { .. } => FieldValue::Empty,
                FormField::Input { default, .. } => FieldValue::Text(default.clone()),
                FormField::Toggle { default, .. } => FieldValue::Toggle(*default),
            })
            .collect()
    }

    fn screen(actions: Vec<MenuAction>) -> Screen {
        match <[MenuAction; 1]>::try_from(actions) {
            Ok([MenuAction::Show(screen)]) => screen,
            other => panic!("expected a single screen, got {other:?}"),
        }
    }

    #[test]
    fn starts_at_main_menu_without_notice() {
        let mut menu = menu(true);
        let main = screen(menu.start().unwrap());

        assert_eq!(menu.state(), MenuState::MainMenu);
        assert_eq!(main.title, "Main Menu");
        assert_eq!(
            main.button_labels(),
            ["Official Servers", "Geyser Servers", "Custom Servers", "Direct connect", "Disconnect"]
        );
    }

    #[test]
    fn blank_notice_is_skipped() {
        let mut menu = menu(true).with_welcome("  \n ");
        menu.start().unwrap();

        assert_eq!(menu.state(), MenuState::MainMenu);
    }

    #[test]
    fn notice_precedes_main_menu() {
        let mut menu = menu(true).with_welcome("Maintenance at 5pm");
        let notice = screen(menu.start().unwrap());

        assert_eq!(menu.state(), MenuState::Welcome);
        assert_eq!(notice.title, "Notice");
        assert_eq!(notice.fields(), [FormField::Label { text: "Maintenance at 5pm".into() }]);

        menu.handle(Outcome::Closed).unwrap();
        assert_eq!(menu.state(), MenuState::MainMenu);
    }

    #[test]
    fn start_twice_is_ignored() {
        let mut menu = menu(true);
        menu.start().unwrap();

        assert!(menu.start().unwrap().is_empty());
    }

    #[test]
    fn server_list_title_names_category() {
        let mut menu = menu(false);
        menu.start().unwrap();
        let list = screen(menu.handle(Outcome::Selected(0)).unwrap());

        assert_eq!(list.title, "Official Servers");
        assert_eq!(list.button_labels(), ["Hive", "Back"]);
    }

    #[test]
    fn connect_finishes_menu() {
        let mut menu = menu(false);
        menu.start().unwrap();
        menu.handle(Outcome::Selected(1)).unwrap();
        let actions = menu.handle(Outcome::Selected(0)).unwrap();

        assert!(matches!(actions.as_slice(), [MenuAction::Connect(entry)] if entry.title() == "Lobby"));
        assert!(menu.is_finished());
        assert!(menu.handle(Outcome::Selected(0)).unwrap().is_empty());
    }

    #[test]
    fn invalid_port_keeps_submitted_values() {
        let mut menu = menu(true);
        menu.start().unwrap();
        let form = screen(menu.handle(Outcome::Selected(3)).unwrap());
        assert_eq!(menu.state(), MenuState::DirectConnect);

        let mut values = filled(&form);
        values[0] = FieldValue::Text("mc.example.net".into());
        values[1] = FieldValue::Text("70000".into());
        let retry = screen(menu.handle(Outcome::Submitted(values)).unwrap());

        assert_eq!(menu.state(), MenuState::DirectConnect);
        assert_eq!(
            retry.fields()[0],
            FormField::Label { text: "\"70000\" is not a valid port (0-65535)".into() }
        );
        assert!(matches!(&retry.fields()[1], FormField::Input { default, .. } if default == "mc.example.net"));

        let mut values = filled(&retry);
        values[2] = FieldValue::Text("19132".into());
        let actions = menu.handle(Outcome::Submitted(values)).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [MenuAction::Connect(entry)] if entry.address() == "mc.example.net" && entry.port() == 19132
        ));
    }
}
