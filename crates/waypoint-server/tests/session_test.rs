//! End-to-end session tests
//!
//! Runs whole console sessions against a temporary data folder and checks
//! what ends up on screen and on disk.

#![allow(clippy::unwrap_used)]

use std::{fs, path::Path};

use tempfile::TempDir;
use tokio::io::BufReader;
use waypoint_core::{CustomServerStore, PlayerId, ServerCategory, ServerEntry};
use waypoint_menu::SessionEnd;
use waypoint_server::{Config, ConsoleTransport, ServerError, StorageKind, Waypoint};

fn config(dir: &Path) -> Config {
    let mut config = Config::default();
    config.data_folder = dir.join("data");
    config.custom_servers.storage = StorageKind::Redb;
    config.servers =
        vec![ServerEntry::new("The Hive", "geo.hivebedrock.network", 19132, ServerCategory::Official)];
    config
}

async fn session(waypoint: &Waypoint, player: &str, input: &'static str) -> (SessionEnd, String) {
    let mut output = Vec::new();
    let transport = ConsoleTransport::new(BufReader::new(input.as_bytes()), &mut output);
    let end = waypoint.run_session(PlayerId::new(player), transport).await.unwrap();
    (end, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn first_start_prepares_data_folder() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path());

    Waypoint::from_config(&config).unwrap();

    let base = fs::read_to_string(config.data_folder.join("lang").join("en_US.lang")).unwrap();
    assert!(base.starts_with('#'));
    assert!(base.contains("ui.title.main_menu=Main Menu"));
    assert!(config.welcome_path().is_file());
    assert!(config.database_path().is_file());
}

#[tokio::test]
async fn custom_server_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = config(dir.path());

    {
        let waypoint = Waypoint::from_config(&config).unwrap();
        // Custom Servers, Edit servers, Add server, form, Back, Back to main, Disconnect
        let input = "2\n0\n0\nmine.example\n19133\n\ny\n2\n2\n4\n";
        let (end, output) = session(&waypoint, "steve", input).await;

        assert!(matches!(end, SessionEnd::Terminated { .. }));
        assert!(output.contains("== Add Server =="));
        assert!(output.contains("[0] mine.example"));
    }

    let waypoint = Waypoint::from_config(&config).unwrap();
    let stored = waypoint.store().get(&PlayerId::new("steve")).unwrap();
    assert_eq!(stored, [ServerEntry::custom("mine.example", 19133, true, true)]);

    // Custom Servers, the saved server
    let (end, output) = session(&waypoint, "steve", "2\n0\n").await;
    assert_eq!(end, SessionEnd::HandedOff(stored[0].clone()));
    assert!(output.ends_with("Connecting to mine.example:19133 ...\n"));
}

#[tokio::test]
async fn welcome_notice_and_language() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path());
    config.language = Some("fr_FR".into());
    fs::create_dir_all(config.data_folder.join("lang")).unwrap();
    fs::write(config.data_folder.join("lang").join("fr_FR.lang"), "ui.title.main_menu=Menu principal\n").unwrap();
    fs::write(config.welcome_path(), "Maintenance tonight").unwrap();

    let waypoint = Waypoint::from_config(&config).unwrap();
    assert_eq!(waypoint.catalog().active_locale(), Some("fr_FR"));

    // The notice has no prompts; then the main menu, then Official, then The Hive
    let (end, output) = session(&waypoint, "alex", "0\n0\n").await;

    assert!(matches!(end, SessionEnd::HandedOff(server) if server.title() == "The Hive"));
    assert!(output.contains("== Notice ==\n  Maintenance tonight\n"));
    assert!(output.contains("== Menu principal =="));
    assert!(output.contains("[0] Official Servers"));
}

#[tokio::test]
async fn disabled_custom_servers_hide_options() {
    let dir = TempDir::new().unwrap();
    let mut config = config(dir.path());
    config.custom_servers.enabled = false;
    config.custom_servers.storage = StorageKind::Memory;

    let waypoint = Waypoint::from_config(&config).unwrap();
    let (end, output) = session(&waypoint, "alex", "2\n").await;

    assert!(matches!(end, SessionEnd::Terminated { .. }));
    assert!(!output.contains("Custom Servers"));
    assert!(output.contains("[2] Disconnect"));
}

#[tokio::test]
async fn second_session_for_player_is_rejected() {
    let dir = TempDir::new().unwrap();
    let waypoint = Waypoint::from_config(&config(dir.path())).unwrap();
    let player = PlayerId::new("steve");
    let guard = waypoint.registry().register(player.clone()).unwrap();

    let mut output = Vec::new();
    let transport = ConsoleTransport::new(BufReader::new(&b"4\n"[..]), &mut output);
    let result = waypoint.run_session(player.clone(), transport).await;

    assert!(matches!(result, Err(ServerError::DuplicateSession(p)) if p == player));
    drop(guard);
    assert_eq!(waypoint.registry().active_count(), 0);
}

#[tokio::test]
async fn session_deregisters_when_input_ends() {
    let dir = TempDir::new().unwrap();
    let waypoint = Waypoint::from_config(&config(dir.path())).unwrap();

    let (end, _) = session(&waypoint, "steve", "0\n").await;

    assert_eq!(end, SessionEnd::Abandoned);
    assert!(!waypoint.registry().is_active(&PlayerId::new("steve")));
}
