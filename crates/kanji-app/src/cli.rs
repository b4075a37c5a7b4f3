use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kanji-lookup", version, about = "Kanji frequency counts and metadata lookups")]
pub struct Cli {
    /// Config file to use instead of `<config dir>/kanji_lookup/config.json`
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count kanji in every file of a script directory and write frequency reports
    Count {
        /// Directory holding the script files
        script_dir: PathBuf,
    },
    /// Print readings and meanings for each distinct kanji
    Lookup {
        /// Read the text from a file instead of the arguments
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(required_unless_present = "file")]
        text: Vec<String>,
    },
    /// Analyze a file's vocabulary and merge it into the word cache
    Words { file: PathBuf },
    /// Send every file of a directory to the analyzer and keep the result pages
    ScanDir {
        dir: PathBuf,
        /// Where to store the pages, defaults to the configured results dir
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Extract words from previously saved analyzer pages
    ScrapeDir {
        dir: PathBuf,
        /// Also merge the words into the word cache
        #[arg(long)]
        merge: bool,
    },
    /// Print the hiragana reading of some text
    Kana {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Write the word cache as a `key:value` listing
    DumpWords {
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn count_requires_directory() {
        let err = Cli::try_parse_from(["kanji-lookup", "count"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn lookup_accepts_text_or_file() {
        let cli = Cli::try_parse_from(["kanji-lookup", "lookup", "日本", "語"]).unwrap();
        assert!(matches!(cli.command, Command::Lookup { ref text, file: None } if text.len() == 2));

        let cli = Cli::try_parse_from(["kanji-lookup", "lookup", "--file", "a.txt"]).unwrap();
        assert!(matches!(cli.command, Command::Lookup { file: Some(_), .. }));

        assert!(Cli::try_parse_from(["kanji-lookup", "lookup"]).is_err());
    }
}
