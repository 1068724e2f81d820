use clap::Parser;
use notemirror::application::{list_folders, locate, probe_access, ExportService};
use notemirror::cli::{format_folder_list, Cli, Commands, USAGE};
use notemirror::domain::FolderSpec;
use notemirror::error::{MirrorError, Result};
use notemirror::infrastructure::logging;
use notemirror::infrastructure::{
    AppleNotesSource, Config, FileSystemOutput, NotesSource, SnapshotSource,
};
use tracing::info;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        // No command, show usage
        println!("{}", USAGE);
        return Ok(());
    };

    let config = Config::discover(cli.config.as_deref())?;
    let base_level = logging::parse_level(&config.logging.level)?;
    logging::init(logging::effective_level(base_level, cli.verbose, cli.quiet));

    match config.snapshot_path(cli.snapshot.as_deref()) {
        Some(path) => {
            let source = SnapshotSource::load(&path)?;
            execute(&source, command)
        }
        None => execute(&AppleNotesSource::new(), command),
    }
}

fn execute<S: NotesSource>(source: &S, command: Commands) -> Result<()> {
    if let Some(banner) = probe_access(source) {
        eprintln!("{}", banner);
    }

    match command {
        Commands::List => {
            let listing = list_folders(source)?;
            print!("{}", format_folder_list(&listing));
            Ok(())
        }
        Commands::Export {
            folder_spec,
            output_dir,
        } => {
            let spec = FolderSpec::parse(&folder_spec);
            let folder = locate(source, &spec).ok_or_else(|| match &spec {
                FolderSpec::Any { folder } => MirrorError::FolderNotFound(folder.clone()),
                FolderSpec::InAccount { account, folder } => MirrorError::AccountFolderNotFound {
                    account: account.clone(),
                    folder: folder.clone(),
                },
            })?;

            let service = ExportService::new(source, &FileSystemOutput);
            let (root, stats) = service.export_folder(&folder, spec.folder(), &output_dir)?;

            info!(
                folders_exported = stats.folders_exported,
                folders_failed = stats.folders_failed,
                notes_exported = stats.notes_exported,
                notes_failed = stats.notes_failed,
                listings_failed = stats.listings_failed,
                notes_overwritten = stats.notes_overwritten,
                "export finished"
            );

            println!("Exported '{}' to {}", spec.folder(), root.display());
            Ok(())
        }
    }
}
