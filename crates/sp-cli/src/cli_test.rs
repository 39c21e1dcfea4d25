use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_etl_flags() {
    let cli = Cli::try_parse_from(["sparkify", "-p", "proj", "etl", "--logs-only", "-q"]).unwrap();
    assert_eq!(cli.global.project_dir, "proj");
    match cli.command {
        Commands::Etl(args) => {
            assert!(args.logs_only);
            assert!(!args.songs_only);
            assert!(args.quiet);
        }
        other => panic!("expected etl, got {other:?}"),
    }
}

#[test]
fn test_etl_dataset_flags_conflict() {
    let result = Cli::try_parse_from(["sparkify", "etl", "--songs-only", "--logs-only"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["sparkify", "create-tables", "--no-drop", "-t", "prod"]).unwrap();
    assert_eq!(cli.global.target.as_deref(), Some("prod"));
    assert!(matches!(
        cli.command,
        Commands::CreateTables(CreateTablesArgs { no_drop: true })
    ));
}
