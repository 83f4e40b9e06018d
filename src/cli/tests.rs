use std::path::Path;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::error::CleanError;

#[test]
fn test_cli_definition_is_consistent() {
    <Cli as CommandFactory>::command().debug_assert();
}

#[test]
fn test_scan_parsing() {
    let cli = Cli::parse_from(["vs-layout-clean", "scan", "C:/vslayout"]);
    match cli.command() {
        Commands::Scan { layout } => assert_eq!(layout, Path::new("C:/vslayout")),
        other => panic!("unexpected command: {other:?}"),
    }
    assert_eq!(cli.global_opts().verbose(), 0);
    assert!(!cli.global_opts().quiet());
}

#[test]
fn test_clean_parsing() {
    let cli = Cli::parse_from(["vs-layout-clean", "clean", "layout", "old", "--dry-run"]);
    match cli.command() {
        Commands::Clean {
            layout,
            destination,
            dry_run,
        } => {
            assert_eq!(layout, Path::new("layout"));
            assert_eq!(destination, Path::new("old"));
            assert!(*dry_run);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_clean_requires_destination() {
    assert!(Cli::try_parse_from(["vs-layout-clean", "clean", "layout"]).is_err());
}

#[test]
fn test_verbose_flag() {
    let cli = Cli::parse_from(["vs-layout-clean", "-vv", "scan", "layout"]);
    assert_eq!(cli.global_opts().verbose(), 2);
}

#[test]
fn test_global_flag_positioning() {
    // Global flags can be placed anywhere
    let cli = Cli::parse_from(["vs-layout-clean", "scan", "layout", "--quiet"]);
    assert!(cli.global_opts().quiet());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["vs-layout-clean", "-q", "-v", "scan", "layout"]).is_err());
}

#[test]
fn test_cli_builder() {
    let cli = Cli::builder()
        .verbose(1)
        .command(Commands::Scan {
            layout: "layout".into(),
        })
        .build()
        .expect("Failed to build CLI");

    assert_eq!(cli.global_opts().verbose(), 1);
    assert!(!cli.global_opts().quiet());
    assert!(matches!(cli.command(), Commands::Scan { .. }));

    assert!(matches!(
        Cli::builder().quiet(true).build(),
        Err(CleanError::ConfigError(_))
    ));
}
