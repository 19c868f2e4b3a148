use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_UNICODE_DATA: &str = "./../data/ucd/UnicodeData.txt";
pub const DEFAULT_EXCLUSIONS: &str = "./../data/ucd/CompositionExclusions.txt";
pub const DEFAULT_OUTPUT: &str = "./../data/normalization.rs.txt";

/// генератор таблиц канонической нормализации из UCD
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(version)]
pub struct Config
{
    /// UnicodeData.txt
    #[arg(long, default_value = DEFAULT_UNICODE_DATA)]
    pub unicode_data: PathBuf,

    /// CompositionExclusions.txt
    #[arg(long, default_value = DEFAULT_EXCLUSIONS)]
    pub exclusions: PathBuf,

    /// файл с таблицами
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            unicode_data: PathBuf::from(DEFAULT_UNICODE_DATA),
            exclusions: PathBuf::from(DEFAULT_EXCLUSIONS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
