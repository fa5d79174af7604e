use clap::{Parser, Subcommand};
use photo_manifest::{config, manifest, output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "photo-manifest")]
#[command(version, about = "Write gallery manifests for a static site")]
#[command(long_about = "\
Write gallery manifests for a static site

Lists the images in each gallery directory and writes a manifest.json next
to them for the site's gallery script to fetch.

Site structure:

  .
  ├── photo-manifest.toml          # Optional (see 'photo-manifest gen-config')
  └── img/
      └── customer_photos/
          ├── manifest.json        # Written
          ├── vinvel_cus_1.jpg     # Customer photos first, by number
          ├── vinvel_cus_2.png
          ├── about.svg            # Everything else after, A-Z
          └── .draft.jpg           # Hidden files are skipped

Listed extensions: jpg, jpeg, png, webp, svg (any case).

Run without a command to write every manifest.")]
struct Cli {
    /// Repository root the gallery directories are resolved against
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Log each skipped entry and written file to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and order every gallery, write each manifest.json (default)
    Write,
    /// Scan every gallery and report what would be written, without writing
    Check,
    /// Print a stock photo-manifest.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Command::Write) {
        Command::Write => {
            let config = config::load_config(&cli.root)?;
            let planned = manifest::plan(&cli.root, &config)?;
            manifest::write_all(&planned)?;
            output::print_write_output(&planned);
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            let checked: Vec<_> = manifest::plan(&cli.root, &config)?
                .into_iter()
                .map(|p| {
                    let status = output::check_status(&p);
                    (p, status)
                })
                .collect();
            output::print_check_output(&checked);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; `RUST_LOG` wins unless `--verbose` is given.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("photo_manifest=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
