use clap::Parser;

use databag_cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = databag_cli::run(&cli, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
