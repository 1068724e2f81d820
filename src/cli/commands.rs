//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notemirror")]
#[command(about = "Mirror a notes folder tree onto the file system", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Read notes from a TOML snapshot instead of the Notes application
    #[arg(long, value_name = "FILE", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Config file (default: $NOTEMIRROR_CONFIG)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Show more log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every top-level folder as "Account > Folder"
    #[command(visible_alias = "ls")]
    List,

    /// Export a folder and all of its subfolders
    Export {
        /// Folder name, or Account:Folder to search a single account
        #[arg(value_name = "FOLDER_SPEC")]
        folder_spec: String,

        /// Directory that will receive the mirrored folder
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["notemirror", "export", "iCloud:Journal", "out"]);
        match cli.command {
            Some(Commands::Export {
                folder_spec,
                output_dir,
            }) => {
                assert_eq!(folder_spec, "iCloud:Journal");
                assert_eq!(output_dir, PathBuf::from("out"));
            }
            other => panic!("Expected export command, got {:?}", other),
        }
    }

    #[test]
    fn test_ls_alias_and_global_flags() {
        let cli = Cli::parse_from(["notemirror", "ls", "--snapshot", "notes.toml", "-vv"]);
        assert!(matches!(cli.command, Some(Commands::List)));
        assert_eq!(cli.snapshot, Some(PathBuf::from("notes.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["notemirror"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
