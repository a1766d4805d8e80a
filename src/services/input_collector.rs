use std::path::Path;
use tokio::io::{AsyncRead, AsyncReadExt};
use crate::config::constants::SUPPORTED_INPUT_EXTENSIONS;
use crate::errors::{InsightFlowError, InsightFlowResult};

/// Raw survey text waiting to be analyzed, and the file it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputCollector {
    text: String,
    file_name: Option<String>,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn append_line(&mut self, line: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(line.trim_end_matches(['\r', '\n']));
    }

    pub fn is_supported_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                SUPPORTED_INPUT_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    /// Replaces the current text with the whole content of `path`.
    ///
    /// On any failure the collector is left as it was.
    pub async fn load_file(&mut self, path: &Path) -> InsightFlowResult<()> {
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if !Self::is_supported_file(path) {
            return Err(InsightFlowError::UnsupportedFile {
                file_name: display_name,
            });
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| InsightFlowError::file_error(&path.display().to_string(), "read", &e.to_string()))?;
        let content = Self::decode(&bytes);
        if content.contains(char::REPLACEMENT_CHARACTER) {
            log::warn!("⚠️ {} is not valid UTF-8; undecodable bytes were replaced", display_name);
        }

        log::info!("📄 Loaded {} ({} bytes)", display_name, content.len());
        self.text = content;
        self.file_name = Some(display_name);
        Ok(())
    }

    /// UTF-8 with invalid sequences replaced and a leading byte order mark dropped.
    fn decode(bytes: &[u8]) -> String {
        let text = String::from_utf8_lossy(bytes);
        text.strip_prefix('\u{feff}').unwrap_or(&text[..]).to_string()
    }

    /// Reads everything from `reader` as directly entered text.
    pub async fn load_reader<R>(&mut self, mut reader: R) -> InsightFlowResult<()>
    where
        R: AsyncRead + Unpin,
    {
        let mut content = String::new();
        reader.read_to_string(&mut content).await?;
        self.text = content;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.file_name = None;
    }

    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn can_submit(&self, is_analyzing: bool) -> bool {
        !is_analyzing && self.has_content()
    }
}
