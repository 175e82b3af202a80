// components/media_downloader/src/ytdlp.rs
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::process::Command;
use crate::types::{AudioRequest, DownloadError, OutputTemplate};
use async_trait::async_trait;

#[async_trait]
pub trait Downloader {
    /// Check if the downloader is available and has all required dependencies
    async fn check_available(&self) -> Result<(), DownloadError>;

    /// Fetch `request.source` and write it according to `request.template`,
    /// returning the path of the produced file
    async fn fetch_audio(&self, request: &AudioRequest) -> Result<PathBuf, DownloadError>;
}

/// yt-dlp template placeholder for the extension it picks
const EXT_PLACEHOLDER: &str = "%(ext)s";

pub struct YtDlp {
    program: PathBuf,
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::with_program("yt-dlp")
    }
}

impl YtDlp {
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    /// Command line arguments for `request`, without the program name
    pub fn args(request: &AudioRequest) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-o".into(),
            Self::output_template(&request.template).into(),
            "--audio-format".into(),
            request.format.as_str().into(),
        ];
        if request.extract_audio {
            args.push("-x".into());
        }
        // the source may start with '-'
        args.push("--".into());
        args.push(request.source.as_str().into());
        args
    }

    /// `<name>.%(ext)s`, with `%` in the name escaped so yt-dlp keeps it literally
    pub fn output_template(template: &OutputTemplate) -> String {
        format!("{}.{}", template.name().as_str().replace('%', "%%"), EXT_PLACEHOLDER)
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }
}

#[async_trait]
impl Downloader for YtDlp {
    async fn check_available(&self) -> Result<(), DownloadError> {
        which::which(&self.program)
            .map(|path| tracing::debug!("using {}", path.display()))
            .map_err(|_| DownloadError::DependencyNotFound(self.program_name()))
    }

    async fn fetch_audio(&self, request: &AudioRequest) -> Result<PathBuf, DownloadError> {
        let args = Self::args(request);
        tracing::debug!(program = %self.program.display(), ?args, "spawning downloader");

        // stdio is inherited so the tool's own progress output reaches the user
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .await?;

        if !status.success() {
            return Err(DownloadError::DownloadFailed {
                program: self.program_name(),
                status,
            });
        }

        Ok(request.output_path())
    }
}

#[cfg(test)]
pub mod stub {
    use super::*;
    use parking_lot::Mutex;
    use std::process::ExitStatus;

    /// Records every request and succeeds
    #[derive(Default)]
    pub struct RecordingDownloader {
        pub requests: Mutex<Vec<AudioRequest>>,
    }

    #[async_trait]
    impl Downloader for RecordingDownloader {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Ok(())
        }

        async fn fetch_audio(&self, request: &AudioRequest) -> Result<PathBuf, DownloadError> {
            self.requests.lock().push(request.clone());
            Ok(request.output_path())
        }
    }

    /// Always fails as if the tool exited with `status`
    pub struct FailingDownloader {
        pub status: ExitStatus,
    }

    #[async_trait]
    impl Downloader for FailingDownloader {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Ok(())
        }

        async fn fetch_audio(&self, _request: &AudioRequest) -> Result<PathBuf, DownloadError> {
            Err(DownloadError::DownloadFailed {
                program: "stub".to_string(),
                status: self.status,
            })
        }
    }

    /// Not installed; must never be asked to download
    pub struct MissingDownloader;

    #[async_trait]
    impl Downloader for MissingDownloader {
        async fn check_available(&self) -> Result<(), DownloadError> {
            Err(DownloadError::DependencyNotFound("stub".to_string()))
        }

        async fn fetch_audio(&self, _request: &AudioRequest) -> Result<PathBuf, DownloadError> {
            panic!("fetch_audio called on a downloader that is not available");
        }
    }
}
