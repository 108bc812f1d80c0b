use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use portfolio::{FilterState, Selection, catalog, render};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio with a filterable project gallery")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the portfolio window
    #[cfg(feature = "gui")]
    Gui {
        /// Technology to preselect ("All" or a tag such as "Next.js")
        #[arg(long, value_name = "TECH", default_value = "All")]
        tech: Selection,
    },
    /// Print the projects matching a technology
    List {
        /// Technology to filter by ("All" or a tag such as "Next.js")
        #[arg(long, value_name = "TECH", default_value = "All")]
        tech: Selection,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the page as a standalone HTML file
    Render {
        /// Technology to preselect ("All" or a tag such as "Next.js")
        #[arg(long, value_name = "TECH", default_value = "All")]
        tech: Selection,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

impl Default for Command {
    #[cfg(feature = "gui")]
    fn default() -> Self {
        Command::Gui { tech: Selection::All }
    }

    #[cfg(not(feature = "gui"))]
    fn default() -> Self {
        Command::List {
            tech: Selection::All,
            json: false,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    match args.command.unwrap_or_default() {
        #[cfg(feature = "gui")]
        Command::Gui { tech } => portfolio::gui::run(tech)?,
        Command::List { tech, json } => {
            let state = FilterState::default().with_selection(tech);
            if json {
                println!("{}", render::render_json(&state)?);
            } else {
                print!("{}", render::render_list(&state));
            }
        }
        Command::Render { tech, out } => {
            let state = FilterState::default().with_selection(tech);
            let year = catalog::current_year();
            match out {
                Some(path) => {
                    render::write_page(&path, &state, year)?;
                    if args.verbose {
                        println!("Wrote {:?}", path);
                    }
                }
                None => println!("{}", render::render_page(&state, year)?),
            }
        }
    }

    Ok(())
}
