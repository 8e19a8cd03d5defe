mod browser;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, regions, render, session, validate};
use choromap_core::BoundaryCache;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.to_config()?;
    let cache = BoundaryCache::new();

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match &commands.command {
        Commands::Regions { boundary } => {
            print::section("regions", cfg.quiet);
            regions::regions(boundary, &cache, &cfg)
        }
        Commands::Validate { boundary } => {
            print::section("validating links", cfg.quiet);
            validate::validate(boundary, &cache, &cfg)
        }
        Commands::Render(args) => render::render(args, &cache, &cfg),
        Commands::Session { boundary } => {
            print::section("starting session", cfg.quiet);
            session::session(boundary, &cache, &cfg).await
        }
    };

    if cfg.quiet == 0 && !matches!(commands.command, Commands::Render(_)) {
        print::rule();
    }
    result
}
