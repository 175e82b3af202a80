// bases/wav_dl/src/args.rs
use clap::error::ErrorKind;
use clap::Parser;

/// Download the audio of a video or stream and save it as a WAV file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL or identifier to download from
    #[arg(value_name = "SOURCE", allow_hyphen_values = true)]
    pub source: Option<String>,

    /// Base name of the output file, without extension
    #[arg(value_name = "NAME", allow_hyphen_values = true)]
    pub name: Option<String>,
}

impl Args {
    /// Parse the process arguments.
    ///
    /// `--help` and `--version` exit through clap; any other parse error is
    /// printed and exits with 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(args) => args,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(1);
                }
            },
        }
    }
}
