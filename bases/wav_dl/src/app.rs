// bases/wav_dl/src/app.rs
use color_eyre::Result;
use media_downloader::MediaDownloader;
use crate::args::Args;
use crate::output::OutputHandler;

pub struct App {
    args: Args,
    output: OutputHandler,
}

impl App {
    pub fn new(args: Args) -> Self {
        Self { args, output: OutputHandler }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::debug!(args = ?self.args, "parsed arguments");
        let downloader = MediaDownloader::new();

        let path = downloader
            .download(self.args.source.as_deref(), self.args.name.as_deref())
            .await?;

        self.output.print_download_complete(&path);
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
