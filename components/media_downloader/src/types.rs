// components/media_downloader/src/types.rs
use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("missing source: expected a URL or media identifier as the first argument")]
    MissingSource,

    #[error("missing name: expected an output file name as the second argument")]
    MissingName,

    #[error("Required dependency not found: {0}")]
    DependencyNotFound(String),

    #[error("{program} exited with status: {status}")]
    DownloadFailed { program: String, status: ExitStatus },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DownloadError {
    /// True for errors caused by how the invoker was called rather than by the downloader
    pub fn is_usage(&self) -> bool {
        matches!(self, DownloadError::MissingSource | DownloadError::MissingName)
    }
}

/// URL or identifier of the media to fetch, passed through to the downloader verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference(String);

impl SourceReference {
    pub fn parse(source: Option<&str>) -> Result<Self, DownloadError> {
        match source {
            Some(s) if !s.is_empty() => Ok(Self(s.to_owned())),
            _ => Err(DownloadError::MissingSource),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Base name of the output file, without extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName(String);

impl OutputName {
    pub fn parse(name: Option<&str>) -> Result<Self, DownloadError> {
        match name {
            Some(n) if !n.is_empty() => Ok(Self(n.to_owned())),
            _ => Err(DownloadError::MissingName),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
}

impl AudioFormat {
    /// Format name as downloaders spell it on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            AudioFormat::Wav => "wav",
        }
    }
}

/// `<name>.<ext>`, where the extension is filled in by the downloader.
///
/// Placeholder syntax differs between tools, so each downloader renders
/// the template itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    name: OutputName,
}

impl OutputTemplate {
    pub fn new(name: OutputName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &OutputName {
        &self.name
    }

    /// Render with the given extension placeholder, e.g. `%(ext)s`
    pub fn render(&self, ext_placeholder: &str) -> String {
        format!("{}.{}", self.name.as_str(), ext_placeholder)
    }

    /// Path the file nominally ends up at once the downloader picks `format`
    pub fn resolve(&self, format: AudioFormat) -> PathBuf {
        PathBuf::from(self.render(format.extension()))
    }
}

/// A single request handed to a [`crate::Downloader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRequest {
    pub source: SourceReference,
    pub template: OutputTemplate,
    pub format: AudioFormat,
    /// Keep only the audio stream
    pub extract_audio: bool,
}

impl AudioRequest {
    pub fn wav(source: SourceReference, name: OutputName) -> Self {
        Self {
            source,
            template: OutputTemplate::new(name),
            format: AudioFormat::Wav,
            extract_audio: true,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.template.resolve(self.format)
    }
}
