//! Built-in base entries.
//!
//! The base layer always contains at least these keys, whatever the base
//! language file on disk says. They are also the contents written when the
//! base file is first generated.

/// Header comment written at the top of a generated base file.
pub const BASE_FILE_HEADER: &str = "Waypoint Language File - English (US)";

/// Every key the menu engine may request, with its English text.
pub const ENTRIES: &[(&str, &str)] = &[
    // Main menu
    ("ui.title.main_menu", "Main Menu"),
    ("ui.button.official_servers", "Official Servers"),
    ("ui.button.geyser_servers", "Geyser Servers"),
    ("ui.button.custom_servers", "Custom Servers"),
    ("ui.button.direct_connect", "Direct connect"),
    ("ui.button.disconnect", "Disconnect"),
    ("ui.button.back", "Back"),
    ("ui.button.yes", "Yes"),
    ("ui.button.no", "No"),
    // Server lists
    ("ui.title.servers", "%s Servers"),
    ("ui.title.edit_servers", "Edit Servers"),
    ("ui.content.edit_servers", "Select a server to edit"),
    ("ui.button.edit_server", "Edit server"),
    ("ui.button.delete_server", "Delete server"),
    ("ui.button.add_server", "Add server"),
    ("ui.button.edit_servers", "Edit servers"),
    // Add/edit server forms
    ("ui.title.add_server", "Add Server"),
    ("ui.title.edit_server", "Edit Server"),
    ("ui.title.direct_connect", "Direct Connect"),
    ("ui.label.ip", "IP"),
    ("ui.label.port", "Port"),
    ("ui.label.online_mode", "Online mode"),
    ("ui.label.bedrock_server", "Bedrock/Geyser server"),
    ("ui.error.invalid_port", "\"%s\" is not a valid port (0-65535)"),
    // Server options
    ("ui.title.server_options", "Server Options"),
    // Delete confirmation
    ("ui.title.delete_server", "Delete Server"),
    ("ui.content.delete_server", "Are you sure you want to delete %s?"),
    // Notice
    ("ui.title.notice", "Notice"),
];
