use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose};

use crate::error::ConvertError;

/// Converts files to base64 text and back, remembering the last text and
/// path it worked with.
///
/// Explicit arguments always win over the stored state; `None` falls back to
/// whatever the previous operation (or the caller) left behind. Both fields
/// start empty and hold at most one value each.
///
/// ```no_run
/// use std::path::Path;
/// use b64convert::Base64Converter;
///
/// let mut converter = Base64Converter::new();
/// let text = converter.convert(Path::new("image.jpg"))?;
/// converter.deconvert(Path::new("image_copy.jpg"))?;
/// # Ok::<(), b64convert::ConvertError>(())
/// ```
#[derive(Debug, Default)]
pub struct Base64Converter {
    encoded: Option<String>,
    path: Option<PathBuf>,
}

impl Base64Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the converter with previously known text and/or path.
    pub fn with_state(encoded: Option<String>, path: Option<PathBuf>) -> Self {
        Self { encoded, path }
    }

    pub fn encoded(&self) -> Option<&str> {
        self.encoded.as_deref()
    }

    pub fn set_encoded(&mut self, text: impl Into<String>) {
        self.encoded = Some(text.into());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Encodes the file at `path` (or the stored path) as base64 text.
    ///
    /// The whole file is read into memory, so peak usage is proportional to
    /// its size. On success the converter keeps both the text and the source
    /// path; note that this makes a read-only-looking call stateful.
    pub fn encode_file(&mut self, path: Option<&Path>) -> Result<String, ConvertError> {
        let path = path
            .or(self.path.as_deref())
            .ok_or(ConvertError::MissingInput("file path"))?
            .to_path_buf();

        if !path.exists() {
            return Err(ConvertError::NotFound(path));
        }
        if !path.is_file() {
            return Err(ConvertError::InvalidInput(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let bytes = fs::read(&path)?;
        let encoded = general_purpose::STANDARD.encode(bytes);
        self.encoded = Some(encoded.clone());
        self.path = Some(path);
        Ok(encoded)
    }

    /// Decodes `text` (or the stored text) and writes the bytes to `path`
    /// (or the stored path), overwriting any existing file.
    ///
    /// Missing parent directories are created. On success the converter
    /// keeps the destination path and returns it.
    pub fn decode_to_file(
        &mut self,
        text: Option<&str>,
        path: Option<&Path>,
    ) -> Result<PathBuf, ConvertError> {
        let text = text
            .or(self.encoded.as_deref())
            .ok_or(ConvertError::MissingInput("base64 text"))?;
        let path = path
            .or(self.path.as_deref())
            .ok_or(ConvertError::MissingInput("destination path"))?
            .to_path_buf();

        let bytes = general_purpose::STANDARD
            .decode(text)
            .map_err(|err| ConvertError::InvalidInput(format!("invalid base64 text: {err}")))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        self.path = Some(path.clone());
        Ok(path)
    }

    /// Alias for [`encode_file`](Self::encode_file) with an explicit path.
    pub fn convert(&mut self, path: &Path) -> Result<String, ConvertError> {
        self.encode_file(Some(path))
    }

    /// Decodes the stored text into `path`. Fails up front with
    /// `MissingInput` when nothing has been encoded or stored yet, which
    /// reads clearer than the general fallback path's late failure.
    pub fn deconvert(&mut self, path: &Path) -> Result<PathBuf, ConvertError> {
        if self.encoded.is_none() {
            return Err(ConvertError::MissingInput("base64 text"));
        }
        self.decode_to_file(None, Some(path))
    }
}

impl fmt::Display for Base64Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(text) = &self.encoded {
            parts.push(format!("base64: {} chars", text.len()));
        }
        if let Some(path) = &self.path {
            parts.push(format!("file: {}", path.display()));
        }
        if parts.is_empty() {
            write!(f, "Base64Converter(empty)")
        } else {
            write!(f, "Base64Converter({})", parts.join(", "))
        }
    }
}
