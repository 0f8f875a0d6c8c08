use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use marc8_codetable_prepare::output::{self, DEFAULT_OUTPUT};
use marc8_codetable_prepare::tables::Options;
use marc8_codetable_source::CODE_TABLE;

/// генератор кода таблицы перекодировки MARC-8 -> Unicode
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command
{
    /// сгенерировать таблицу
    Generate
    {
        /// куда записать сгенерированный код
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

fn main() -> Result<()>
{
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    match cli.command {
        Command::Generate { output: path } => {
            output::generate(&CODE_TABLE, &Options::default(), &path)?;
        }
    }

    Ok(())
}
