use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;
use waypoint_cli::{CliContext, commands, error::report, logging, readline};

fn main() -> Result<(), String> {
    logging::init();
    let mut ctx = CliContext::new();

    // Load the configured export if there is one
    if Path::new(&ctx.config.data_path).exists() {
        let path = ctx.config.data_path.clone();
        if let Err(err) = commands::load(Some(path.as_str()), &mut ctx) {
            println!("{}", report(&err));
        }
    }

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &mut ctx) {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(version, about = "waypoint trip planner")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a trip export (defaults to the configured data path)
    Load {
        #[arg(short, long)]
        path: Option<String>,
    },
    /// Dashboard of all trips
    List {
        /// Only trips marked as favorite
        #[arg(long)]
        favorites: bool,
    },
    Show {
        #[arg(short, long)]
        id: i64,
    },
    /// Destinations of a trip in display order
    Destinations {
        #[arg(short, long)]
        id: i64,
    },
    /// Prepare the payloads of a saved new-trip form
    Draft {
        #[arg(short, long)]
        path: String,
        /// Trip id for the destination payloads (defaults to the next free id)
        #[arg(long)]
        trip_id: Option<i64>,
    },
    /// Show, pin or unpin the instant used for countdowns
    Now {
        #[arg(short, long)]
        set: Option<String>,
        #[arg(long)]
        clear: bool,
    },
    /// Show the configuration, or update and save it
    Config {
        #[arg(long)]
        data_path: Option<String>,
        #[arg(long)]
        use_utc: Option<bool>,
    },
    Exit,
}

fn respond(line: &str, ctx: &mut CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "waypoint".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    let result = match &cli.command {
        Some(Commands::Load { path }) => commands::load(path.as_deref(), ctx),
        Some(Commands::List { favorites }) => commands::list(*favorites, ctx),
        Some(Commands::Show { id }) => commands::show(*id, ctx),
        Some(Commands::Destinations { id }) => commands::destinations(*id, ctx),
        Some(Commands::Draft { path, trip_id }) => commands::draft(path, *trip_id, ctx),
        Some(Commands::Now { set, clear }) => commands::now(set.as_deref(), *clear, ctx),
        Some(Commands::Config { data_path, use_utc }) => {
            commands::configure(data_path.clone(), *use_utc, ctx)
        }
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => Ok(()),
    };
    result.map_err(|e| report(&e))?;
    Ok(false)
}
