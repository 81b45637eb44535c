use anyhow::Result;
use clap::{Parser, Subcommand};
use skillhub_core::skill::ProficiencyLevel;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod backend;
mod commands;
mod terminal;

#[derive(Parser)]
#[command(name = "skillhub")]
#[command(about = "SkillHub CLI - student profiles and skill lists", long_about = None)]
struct Cli {
    /// Run against a seeded in-memory backend instead of the hosted one
    #[arg(long, global = true)]
    offline: bool,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the signed-in student's profile and skills
    Profile,
    /// Add a skill to the signed-in student's list
    AddSkill {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Beginner, Intermediate, Advanced or Expert
        #[arg(long, default_value_t = ProficiencyLevel::Beginner)]
        level: ProficiencyLevel,
    },
    /// Sign out
    Logout,
    /// Show which page a path resolves to for the current session
    Route { path: String },
    /// Write the backend URL and anon key to the config file
    Configure {
        #[arg(long)]
        url: String,
        #[arg(long)]
        anon_key: String,
        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "skillhub=debug,skillhub_application=debug,skillhub_infrastructure=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let offline = cli.offline;
    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(offline, &email, &password).await?
        }
        Commands::Profile => commands::profile::show(offline).await?,
        Commands::AddSkill {
            title,
            description,
            level,
        } => commands::profile::add_skill(offline, title, description, level).await?,
        Commands::Logout => commands::auth::logout(offline).await?,
        Commands::Route { path } => commands::route::show(offline, &path).await?,
        Commands::Configure {
            url,
            anon_key,
            timeout_secs,
        } => commands::configure::save(url, anon_key, timeout_secs).await?,
    }

    Ok(())
}
