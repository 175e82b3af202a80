// bases/wav_dl/src/output.rs
use std::path::Path;
use media_downloader::DownloadError;

pub struct OutputHandler;

impl OutputHandler {
    pub fn print_download_complete(&self, path: &Path) {
        println!("Saved audio to {}", path.display());
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("error: {}", error);

        let is_usage = error
            .downcast_ref::<DownloadError>()
            .is_some_and(DownloadError::is_usage);
        if is_usage {
            eprintln!("usage: {} <SOURCE> <NAME>", env!("CARGO_PKG_NAME"));
        }
    }
}
