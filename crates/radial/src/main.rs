use clap::{Parser, Subcommand};
use radial::app::AppModel;
use radial::config;
use radial::render;
use radial::shell::{self, Launch};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "radial", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of the one in the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Print selected commands instead of running them
    #[arg(short = 'n', long)]
    dry_run: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Read menu commands from stdin (default)
    Run,
    /// Print the root menu layout and exit
    Layout,
    /// Write the bundled config if none exists yet
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::Init) = cli.command {
        let path = config::write_default_config(cli.config.as_deref())?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_setup(cli.config.as_deref());
    let mut model = AppModel::new(&config, cli.config.clone())?;

    match cli.command {
        Some(Commands::Layout) => {
            print!("{}", render::draw(model.menu())?);
            Ok(())
        }
        _ => {
            let mode = if cli.dry_run {
                Launch::DryRun
            } else {
                Launch::Spawn
            };
            shell::run(&mut model, io::stdin().lock(), io::stdout().lock(), mode)
        }
    }
}
