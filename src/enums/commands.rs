use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::language::Language;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Analyze survey data once and print the report
    Analyze {
        /// Survey file to analyze (.csv or .txt)
        #[clap(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Survey text to analyze; stdin is read when neither --file nor --text is given
        #[clap(short, long)]
        text: Option<String>,
        /// Report language to display
        #[clap(short, long, value_enum)]
        lang: Option<Language>,
        /// Print the full bilingual result as JSON
        #[clap(long)]
        json: bool,
        /// Save the result so it can be shown again with `render`
        #[clap(short, long)]
        save: Option<PathBuf>,
    },
    /// Show a previously saved report without contacting the AI service
    Render {
        path: PathBuf,
        #[clap(short, long, value_enum)]
        lang: Option<Language>,
        #[clap(long)]
        json: bool,
    },
    /// Interactive session: collect input, analyze, browse and toggle the report
    Interactive,
    /// Check the configuration and credential
    Validate,
}
