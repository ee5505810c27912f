use crate::{commands::SharedArgs, error::CliError};
use connectors::charsets::{CharsetSource, JsonCharsetSource, MySqlCharsetSource};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

const ENV_MYSQL_URL: &str = "SDI2DDL_MYSQL_URL";
const ENV_CHARSETS: &str = "SDI2DDL_CHARSETS";
const ENV_IBD2SDI: &str = "SDI2DDL_IBD2SDI";
const ENV_BACKUP_DIR: &str = "SDI2DDL_BACKUP_DIR";
const ENV_OUTPUT_DIR: &str = "SDI2DDL_OUTPUT_DIR";
const ENV_DATABASES: &str = "SDI2DDL_DATABASES";
const ENV_JOBS: &str = "SDI2DDL_JOBS";

const DEFAULT_ENV_FILE: &str = ".env";
const DEFAULT_IBD2SDI: &str = "ibd2sdi";
const DEFAULT_JOBS: usize = 4;

/// Environment variables of the process, optionally extended from a .env file
#[derive(Debug, Clone)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Loads the file given on the command line, or `./.env` when it exists.
    pub fn load(env_file: Option<&Path>) -> Result<Self, CliError> {
        let mut env = Self::new();
        match env_file {
            Some(path) => env.load_from_file(path)?,
            None if Path::new(DEFAULT_ENV_FILE).is_file() => env.load_from_file(DEFAULT_ENV_FILE)?,
            None => {}
        }
        Ok(env)
    }

    /// Load variables from a .env file. File values win over the process
    /// environment.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)?;
        info!("Loaded environment from {}", path.display());
        Ok(())
    }

    /// Non-empty value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars.insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Effective configuration: command line flags first, then environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mysql_url: Option<String>,
    pub charsets: Option<PathBuf>,
    pub ibd2sdi: PathBuf,
    pub backup_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    /// Empty means every database directory.
    pub databases: Vec<String>,
    pub jobs: usize,
}

impl Settings {
    pub fn resolve(args: &SharedArgs, env: &EnvManager) -> Result<Self, CliError> {
        let path_setting = |flag: &Option<PathBuf>, key: &str| {
            flag.clone().or_else(|| env.get(key).map(PathBuf::from))
        };

        let databases = if args.databases.is_empty() {
            env.get(ENV_DATABASES)
                .map(split_list)
                .unwrap_or_default()
        } else {
            args.databases.iter().flat_map(|d| split_list(d)).collect()
        };

        let jobs = match (args.jobs, env.get(ENV_JOBS)) {
            (Some(jobs), _) => jobs,
            (None, Some(raw)) => raw.trim().parse::<usize>().map_err(|_| {
                CliError::Config(format!("{ENV_JOBS} must be a positive number, got '{raw}'"))
            })?,
            (None, None) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(DEFAULT_JOBS),
        };
        if jobs == 0 {
            return Err(CliError::Config("The number of jobs must be at least 1".into()));
        }

        let settings = Settings {
            mysql_url: args
                .mysql_url
                .clone()
                .or_else(|| env.get(ENV_MYSQL_URL).map(str::to_string)),
            charsets: path_setting(&args.charsets, ENV_CHARSETS),
            ibd2sdi: path_setting(&args.ibd2sdi, ENV_IBD2SDI)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IBD2SDI)),
            backup_dir: path_setting(&args.backup_dir, ENV_BACKUP_DIR),
            output_dir: path_setting(&args.output_dir, ENV_OUTPUT_DIR),
            databases,
            jobs,
        };
        debug!(
            "Resolved settings: databases={:?}, jobs={}",
            settings.databases, settings.jobs
        );
        Ok(settings)
    }

    pub fn backup_dir(&self) -> Result<&Path, CliError> {
        required(self.backup_dir.as_deref(), "--backup-dir", ENV_BACKUP_DIR)
    }

    pub fn output_dir(&self) -> Result<&Path, CliError> {
        required(self.output_dir.as_deref(), "--output-dir", ENV_OUTPUT_DIR)
    }

    /// A catalog snapshot takes precedence over a live server.
    pub fn charset_source(&self) -> Result<Box<dyn CharsetSource>, CliError> {
        if let Some(path) = &self.charsets {
            return Ok(Box::new(JsonCharsetSource::new(path)));
        }
        if let Some(url) = &self.mysql_url {
            return Ok(Box::new(MySqlCharsetSource::new(url)));
        }
        Err(CliError::Config(format!(
            "No collation catalog: set --charsets ({ENV_CHARSETS}) or --mysql-url ({ENV_MYSQL_URL})"
        )))
    }
}

fn required<'a>(value: Option<&'a Path>, flag: &str, key: &str) -> Result<&'a Path, CliError> {
    value.ok_or_else(|| CliError::Config(format!("Missing setting: {flag} or {key}")))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
