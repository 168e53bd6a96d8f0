use clap::Parser;
use log::info;
use sysfonts::cli::{Cli, Command};
use sysfonts::config::Config;
use sysfonts::registry::FontRegistry;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load();
    let registry = FontRegistry::with_config(&config);

    match cli.command.unwrap_or(Command::Names) {
        Command::Names => {
            for name in registry.all_names() {
                println!("{name}");
            }
        }
        Command::Paths => {
            for path in registry.all_paths() {
                println!("{}", path.display());
            }
        }
        Command::Resolve { name } => match registry.resolve_path(&name) {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("no font matching `{name}`");
                std::process::exit(1);
            }
        },
        Command::Default => match registry.default_font() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("no system fonts found");
                std::process::exit(1);
            }
        },
        Command::Load { path, size, style } => {
            let size = size.or(config.font.size).unwrap_or(14);
            match registry.load(&path, size, style.as_deref()) {
                Ok(handle) => {
                    info!("loaded {}", path.display());
                    println!(
                        "{} {}px line-height {:.1}",
                        path.display(),
                        handle.size(),
                        handle.line_height()
                    );
                }
                Err(e) => {
                    log::error!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
