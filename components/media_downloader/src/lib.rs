// components/media_downloader/src/lib.rs
mod types;
mod ytdlp;

use std::path::PathBuf;
use std::sync::Arc;

pub use types::{AudioFormat, AudioRequest, DownloadError, OutputName, OutputTemplate, SourceReference};
pub use ytdlp::{Downloader, YtDlp};

pub struct MediaDownloader {
    downloader: Arc<dyn Downloader + Send + Sync>,
}

impl Default for MediaDownloader {
    fn default() -> Self {
        Self::new_with_downloader(Arc::new(YtDlp::default()))
    }
}

impl MediaDownloader {
    /// Create a new MediaDownloader backed by yt-dlp
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MediaDownloader with a specific downloader implementation
    pub fn new_with_downloader(downloader: Arc<dyn Downloader + Send + Sync>) -> Self {
        Self { downloader }
    }

    /// Download the audio of `source` as `<name>.wav` in the working directory.
    ///
    /// `source` is checked before `name`; the downloader is only consulted
    /// once both are non-empty.
    pub async fn download(
        &self,
        source: Option<&str>,
        name: Option<&str>,
    ) -> Result<PathBuf, DownloadError> {
        let source = SourceReference::parse(source)?;
        let name = OutputName::parse(name)?;
        let request = AudioRequest::wav(source, name);

        self.downloader.check_available().await?;

        tracing::info!(source = %request.source, output = %request.output_path().display(), "downloading audio");
        let path = self.downloader.fetch_audio(&request).await?;
        tracing::info!(path = %path.display(), "download finished");

        Ok(path)
    }
}
