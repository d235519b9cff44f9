use std::collections::HashSet;

use crate::model_card::CardFlags;

/// Which model is active, which are on disk, and which one is downloading.
#[derive(Debug, Clone, Default)]
pub struct ModelSelection {
    active: Option<String>,
    downloaded: HashSet<String>,
    downloading: Option<String>,
}

impl ModelSelection {
    pub fn new(installed: impl IntoIterator<Item = String>) -> Self {
        Self {
            downloaded: installed.into_iter().collect(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[cfg(test)]
    pub fn is_downloaded(&self, id: &str) -> bool {
        self.downloaded.contains(id)
    }

    pub fn set_active(&mut self, id: &str) {
        self.active = Some(id.to_string());
    }

    pub fn start_download(&mut self, id: &str) {
        self.downloading = Some(id.to_string());
    }

    /// Marks the in-flight download finished; `success` adds it to disk.
    pub fn finish_download(&mut self, success: bool) {
        if let Some(id) = self.downloading.take() {
            if success {
                self.downloaded.insert(id);
            }
        }
    }

    /// Forget a downloaded model. Clears the active model if it was this one.
    ///
    /// Returns `false` when the model was not downloaded.
    pub fn uninstall(&mut self, id: &str) -> bool {
        if !self.downloaded.remove(id) {
            return false;
        }
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        true
    }

    pub fn flags_for(&self, id: &str) -> CardFlags {
        CardFlags {
            disabled: self.downloading.is_some(),
            is_active: self.active.as_deref() == Some(id),
            downloaded: self.downloaded.contains(id),
            downloading: self.downloading.as_deref() == Some(id),
        }
    }
}
