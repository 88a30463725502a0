//! # dreamprops
//!
//! Terminal front end for the DreamProps listing browser. Each invocation
//! loads settings, fetches the listing, runs one command, and prints the
//! resulting screen. The session persists between invocations.

#![deny(unsafe_code)]

mod terminal;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dreamprops_app::App;
use dreamprops_auth::SignUpForm;
use dreamprops_core::{AppError, ListingType, TypeHint};
use dreamprops_settings::{DreamPropsSettings, load_settings, load_settings_from_path};

use crate::terminal::TerminalPresenter;

/// Browse DreamProps real-estate listings.
#[derive(Parser, Debug)]
#[command(name = "dreamprops", version, about = "Browse DreamProps real-estate listings")]
struct Cli {
    /// Settings file (defaults to `~/.dreamprops/settings.json`).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Listing endpoint URL (overrides settings).
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Directory holding the persisted session (overrides settings).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log filter, e.g. `info` or `dreamprops_listings=debug`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a page by location, e.g. `#properties`.
    Browse {
        /// Location or fragment; empty means home.
        location: Option<String>,
    },
    /// Filter the full listing.
    Search {
        /// Term matched against name, city, state, country and owner.
        #[arg(default_value = "")]
        term: String,
        /// Restrict to `sale` or `rent`.
        #[arg(long = "type", value_parser = parse_type_hint, default_value = "")]
        type_hint: TypeHint,
        /// Page of results to show.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show the sale or rent tab of the home page.
    Tab {
        /// Which tab.
        #[arg(value_enum)]
        tab: TabArg,
    },
    /// Sign in (simulated).
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Password, at least six characters.
        #[arg(long)]
        password: String,
    },
    /// Sign out.
    Logout,
    /// Create an account (simulated).
    Signup {
        /// Full name.
        #[arg(long)]
        name: String,
        /// Account email.
        #[arg(long)]
        email: String,
        /// Password, at least six characters.
        #[arg(long)]
        password: String,
        /// Repeat the password.
        #[arg(long)]
        confirm_password: String,
        /// Accept the Terms & Conditions.
        #[arg(long)]
        accept_terms: bool,
    },
    /// Subscribe to the newsletter.
    Subscribe {
        /// Address to subscribe.
        #[arg(long)]
        email: String,
    },
    /// Show the signed-in user without fetching listings.
    Whoami,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TabArg {
    /// Properties for sale.
    Sale,
    /// Properties for rent.
    Rent,
}

impl From<TabArg> for ListingType {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Sale => Self::Sale,
            TabArg::Rent => Self::Rent,
        }
    }
}

fn parse_type_hint(value: &str) -> std::result::Result<TypeHint, String> {
    value.parse()
}

fn resolve_settings(cli: &Cli) -> Result<DreamPropsSettings> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings_from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => load_settings().context("Failed to load settings")?,
    };

    if let Some(endpoint) = &cli.endpoint {
        settings.api.endpoint.clone_from(endpoint);
    }
    if let Some(dir) = &cli.data_dir {
        settings.storage.data_dir.clone_from(dir);
    }
    if let Some(level) = &cli.log_level {
        settings.logging.level.clone_from(level);
    }
    settings.validate().context("Invalid settings")?;
    Ok(settings)
}

fn init_logging(settings: &DreamPropsSettings) {
    if settings.logging.json {
        dreamprops_core::logging::init_json_subscriber(&settings.logging.level);
    } else {
        dreamprops_core::logging::init_subscriber(&settings.logging.level);
    }
}

impl Command {
    /// Page the startup routing lands on before the command runs.
    fn start_location(&self) -> Option<&str> {
        match self {
            Self::Browse { location } => location.as_deref(),
            Self::Search { .. } => Some("properties"),
            Self::Login { .. } => Some("login"),
            Self::Signup { .. } => Some("signup"),
            Self::Tab { .. } | Self::Logout | Self::Subscribe { .. } | Self::Whoami => None,
        }
    }
}

/// Fetch, then run `command`.
///
/// A failed fetch does not stop the command; it runs against an empty store
/// and the fetch error is returned afterwards.
async fn run(app: &mut App<TerminalPresenter>, command: Command) -> Result<(), AppError> {
    if matches!(command, Command::Whoami) {
        let _ = app.restore_session();
        return Ok(());
    }

    let loaded = app.start(command.start_location()).await;
    match command {
        Command::Browse { .. } | Command::Whoami => {}
        Command::Search {
            term,
            type_hint,
            page,
        } => {
            app.apply_filter(&term, type_hint);
            if page > 1 && !app.change_page(page) {
                tracing::warn!(page, pages = app.store().page_count(), "page out of range");
            }
        }
        Command::Tab { tab } => app.show_tab(tab.into()),
        Command::Login { email, password } => app.sign_in(&email, &password).await?,
        Command::Logout => app.sign_out()?,
        Command::Signup {
            name,
            email,
            password,
            confirm_password,
            accept_terms,
        } => {
            let form = SignUpForm {
                name,
                email,
                password,
                confirm_password,
                terms_accepted: accept_terms,
            };
            app.sign_up(&form).await?;
        }
        Command::Subscribe { email } => app.subscribe_newsletter(&email).await?,
    }
    loaded.map(|_| ())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    init_logging(&settings);
    tracing::debug!(endpoint = %settings.api.endpoint, "settings resolved");

    let whoami = matches!(cli.command, Command::Whoami);
    let mut app = App::from_settings(settings, TerminalPresenter::new());
    let outcome = run(&mut app, cli.command).await;

    if whoami {
        match app.session() {
            Some(session) => println!("{} <{}>", session.name, session.email),
            None => println!("Not signed in."),
        }
    } else {
        print!("{}", app.presenter().screen());
    }

    outcome.context("dreamprops command failed")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
