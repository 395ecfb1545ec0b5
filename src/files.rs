//! File classification for leaf-row icons.
//!
//! Total mapping from a file name's extension (substring after the last
//! `.`) to a display kind. Unrecognized extensions fall back to a MIME
//! probe before landing on [`FileKind::Unknown`].

use serde::Serialize;

/// Display kind for a document leaf, selected from its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Markdown,
    Text,
    Image,
    Audio,
    Video,
    Archive,
    Code,
    Spreadsheet,
    Presentation,
    #[default]
    Unknown,
}

impl FileKind {
    /// Classify a file by name. Total: every input maps to a variant, a
    /// missing extension maps to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let Some(ext) = extension(name) else {
            return Self::Unknown;
        };
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "md" | "markdown" | "mdx" => Self::Markdown,
            "txt" | "rtf" | "log" => Self::Text,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" => Self::Image,
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => Self::Audio,
            "mp4" | "mov" | "webm" | "mkv" | "avi" => Self::Video,
            "zip" | "tar" | "gz" | "7z" | "rar" => Self::Archive,
            "rs" | "py" | "js" | "ts" | "tsx" | "jsx" | "json" | "yaml" | "yml" | "toml"
            | "html" | "css" | "sh" => Self::Code,
            "csv" | "tsv" | "xls" | "xlsx" | "ods" => Self::Spreadsheet,
            "ppt" | "pptx" | "odp" => Self::Presentation,
            other => Self::from_mime_probe(other),
        }
    }

    /// Coarse fallback via the MIME top-level type for extensions the
    /// explicit table does not know.
    fn from_mime_probe(ext: &str) -> Self {
        let Some(mime) = mime_guess::from_ext(ext).first() else {
            return Self::Unknown;
        };
        match mime.type_().as_str() {
            "image" => Self::Image,
            "audio" => Self::Audio,
            "video" => Self::Video,
            "text" => Self::Text,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label, used as the icon tooltip.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Markdown => "Markdown",
            Self::Text => "Text",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Archive => "Archive",
            Self::Code => "Code",
            Self::Spreadsheet => "Spreadsheet",
            Self::Presentation => "Presentation",
            Self::Unknown => "File",
        }
    }
}

/// Substring after the last `.`, if there is one and it is non-empty.
fn extension(name: &str) -> Option<&str> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() { None } else { Some(ext) }
}
