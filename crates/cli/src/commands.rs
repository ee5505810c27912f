use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Settings shared by every subcommand. Each one falls back to its
/// `SDI2DDL_*` environment variable when the flag is absent.
#[derive(Args, Debug, Clone, Default)]
pub struct SharedArgs {
    #[arg(
        long,
        global = true,
        help = "Load environment variables from this file (default: ./.env when present)"
    )]
    pub env_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "MySQL URL used to read the collation catalog [env: SDI2DDL_MYSQL_URL]"
    )]
    pub mysql_url: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Collation catalog JSON written by the `charsets` command [env: SDI2DDL_CHARSETS]"
    )]
    pub charsets: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Path of the ibd2sdi executable [env: SDI2DDL_IBD2SDI]"
    )]
    pub ibd2sdi: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Directory holding one sub-directory of tablespace files per database [env: SDI2DDL_BACKUP_DIR]"
    )]
    pub backup_dir: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Directory receiving SDI documents and SQL scripts [env: SDI2DDL_OUTPUT_DIR]"
    )]
    pub output_dir: Option<PathBuf>,

    #[arg(
        long = "database",
        global = true,
        help = "Only process this database; repeatable [env: SDI2DDL_DATABASES, comma separated]"
    )]
    pub databases: Vec<String>,

    #[arg(
        long,
        global = true,
        help = "Number of documents compiled in parallel [env: SDI2DDL_JOBS]"
    )]
    pub jobs: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract table SDI documents from the tablespaces of a backup
    Sdi,
    /// Generate CREATE TABLE scripts from extracted SDI documents
    Sql,
    /// Dump the collation catalog as JSON for later offline runs
    Charsets {
        #[arg(
            long,
            help = "If specified, writes the catalog to this file instead of stdout"
        )]
        output: Option<PathBuf>,
    },
    /// Print the decoded table definition of one SDI document as JSON
    Ast {
        #[arg(long, help = "SDI document path")]
        file: PathBuf,
    },
    /// Print the DDL of one SDI document
    Compile {
        #[arg(long, help = "SDI document path")]
        file: PathBuf,
    },
}
