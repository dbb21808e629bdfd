use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AccountService, AppServices, ClassroomService, Clock, QuizService, ServiceConfig,
};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn accounts(&self) -> Arc<AccountService> {
        self.services.accounts()
    }

    fn classroom(&self) -> Arc<ClassroomService> {
        self.services.classroom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StorageChoice {
    Sqlite(String),
    Memory,
}

#[derive(Debug)]
struct Args {
    storage: StorageChoice,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] [--memory]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://quiz.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_GENERATOR_URL, QUIZ_API_BASE_URL,");
    eprintln!("  QUIZ_CLASSROOM_URL, QUIZ_HTTP_TIMEOUT_SECS, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_db_url: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut storage = StorageChoice::Sqlite(
            env_db_url
                .filter(|value| !value.trim().is_empty())
                .map_or_else(|| "sqlite://quiz.sqlite3".into(), normalize_sqlite_url),
        );

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    storage = StorageChoice::Sqlite(normalize_sqlite_url(value));
                }
                "--memory" => storage = StorageChoice::Memory,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { storage })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var("QUIZ_DB_URL").ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = ServiceConfig::from_env()?;

    // Open + migrate SQLite at startup so services only ever see a ready store.
    let storage = match &parsed.storage {
        StorageChoice::Sqlite(db_url) => {
            prepare_sqlite_file(db_url)?;
            Storage::sqlite(db_url).await?
        }
        StorageChoice::Memory => Storage::in_memory(),
    };
    info!(
        storage = ?parsed.storage,
        generator = %config.generator_url,
        accounts = config.api_base_url.is_some(),
        "starting quiz app"
    );

    let services = AppServices::new(&storage, &config, Clock::default())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EduAssess")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: Option<&str>) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, env.map(str::to_string))
    }

    #[test]
    fn defaults_to_local_sqlite_file() {
        let args = parse(&[], None).unwrap();
        assert_eq!(
            args.storage,
            StorageChoice::Sqlite("sqlite://quiz.sqlite3".into())
        );
    }

    #[test]
    fn flag_overrides_environment() {
        let args = parse(&["--db", "sqlite:///tmp/a.db"], Some("sqlite:///tmp/b.db")).unwrap();
        assert_eq!(args.storage, StorageChoice::Sqlite("sqlite:///tmp/a.db".into()));

        let args = parse(&[], Some("sqlite:///tmp/b.db")).unwrap();
        assert_eq!(args.storage, StorageChoice::Sqlite("sqlite:///tmp/b.db".into()));
    }

    #[test]
    fn memory_flag_skips_sqlite() {
        let args = parse(&["--memory"], None).unwrap();
        assert_eq!(args.storage, StorageChoice::Memory);
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(
            parse(&["--db"], None),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(&["--nope"], None),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("data/quiz.db".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/quiz.db"));
    }
}
