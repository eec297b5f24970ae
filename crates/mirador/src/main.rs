mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mirador",
    version,
    about = "Inspect the back-to-front window stack"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List all surfaces in back-to-front stacking order
    List {
        /// Include the system status surface (the taskbar)
        #[arg(long)]
        status_bar: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = mirador_core::config::load();
    mirador_core::log::init(&config.logging);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List { status_bar } => {
            let include = status_bar || config.provider.include_status_bar;
            commands::list::execute(include);
        }
    }
}
