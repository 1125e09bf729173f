use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use visitmap::core::geo::DEFAULT_DATASET_URL;
use visitmap::{Catalog, DatasetLoader, DatasetSource, GeoDataset, Session, StatusStore, Tracker};
use visitmap::{VisitStatus, shell};

#[derive(Parser)]
#[command(name = "visitmap", version)]
#[command(about = "Track the countries you have visited on a world map")]
struct Cli {
    /// JSON file holding the visited status of every country
    #[arg(long, value_name = "FILE", env = "VISITMAP_STATE", default_value = "country_status.json", global = true)]
    state: PathBuf,

    /// GeoJSON world boundaries, as a local path or an http(s) URL
    #[arg(long, value_name = "PATH|URL", env = "VISITMAP_DATASET", default_value = DEFAULT_DATASET_URL, global = true)]
    dataset: String,

    /// Always download the dataset instead of using the cached copy
    #[arg(long, global = true)]
    no_cache: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List every country of the dataset
    Catalog,

    /// Show how many countries are visited
    Progress,

    /// Set the status of one country
    Mark {
        #[arg(value_name = "COUNTRY")]
        country: String,

        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Print the map styling as JSON
    Render {
        /// Country to outline and focus on
        #[arg(long, value_name = "COUNTRY")]
        select: Option<String>,
    },

    /// Interactive session reading commands from stdin
    Play {
        /// Seed for the random picks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Open the map window (the default)
    Gui,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusArg {
    Visited,
    NotVisited,
}

impl From<StatusArg> for VisitStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Visited => VisitStatus::Visited,
            StatusArg::NotVisited => VisitStatus::NotVisited,
        }
    }
}

fn load_dataset(cli: &Cli) -> anyhow::Result<GeoDataset> {
    let source: DatasetSource = cli.dataset.parse()?;
    let mut loader = DatasetLoader::new(source);
    if cli.no_cache {
        loader = loader.with_cache_dir(None);
    }
    loader
        .load()
        .with_context(|| format!("Failed to load world dataset from {}", loader.source()))
}

#[cfg(feature = "gui")]
fn open_window(dataset: GeoDataset, tracker: Tracker) -> anyhow::Result<()> {
    visitmap::gui::run(dataset, tracker)
}

#[cfg(not(feature = "gui"))]
fn open_window(_dataset: GeoDataset, _tracker: Tracker) -> anyhow::Result<()> {
    anyhow::bail!("Built without the `gui` feature; use a subcommand, see --help")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Startup: nothing is shown until the catalog and the record are ready.
    let dataset = load_dataset(&cli)?;
    let catalog = Catalog::build(&dataset).context("Unusable world dataset")?;
    let store = StatusStore::new(&cli.state);
    let mut tracker = Tracker::open(catalog, store)
        .with_context(|| format!("Failed to open status file {:?}", cli.state))?;

    match cli.command {
        Some(Command::Catalog) => {
            for name in tracker.catalog().iter() {
                println!("{}", name);
            }
        }
        Some(Command::Progress) => {
            println!("Progress: {}", tracker.progress());
            for name in tracker.visited() {
                println!("  {}", name);
            }
        }
        Some(Command::Mark { country, status }) => {
            if !tracker.catalog().contains(&country) {
                anyhow::bail!("Unknown country: {}", country);
            }
            let status = VisitStatus::from(status);
            tracker.set_status(&country, status)?;
            println!("{}: {}", country, status);
            println!("Progress: {}", tracker.progress());
        }
        Some(Command::Render { select }) => {
            let session = Session {
                entered: true,
                selected: select,
            };
            let spec = tracker.render(&dataset, &session);
            serde_json::to_writer_pretty(io::stdout().lock(), &spec)?;
            println!();
        }
        Some(Command::Play { seed }) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut session = Session::new();
            shell::run(
                &mut tracker,
                &mut session,
                &mut rng,
                io::stdin().lock(),
                io::stdout().lock(),
            )?;
        }
        Some(Command::Gui) | None => open_window(dataset, tracker)?,
    }

    Ok(())
}
