use anyhow::Result;

mod cli;
mod config;
mod store;

fn main() -> Result<()> {
    env_logger::init();
    cli::run()
}
