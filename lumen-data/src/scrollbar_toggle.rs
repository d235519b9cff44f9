//! "Show scrollbar" preference with optimistic update and rollback.
//!
//! The state machine never talks to the network itself. Callers feed it the
//! results of [`crate::PreferenceStore`] calls made by a background
//! [`crate::PreferenceWorker`].

use crate::preferences::{SettingsPatch, SystemPreferences};

/// Whether a write is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveState {
    #[default]
    Idle,
    /// A write is pending; `previous` is restored if it fails
    Saving { previous: bool },
}

#[derive(Debug, Clone, Default)]
pub struct ScrollbarToggle {
    show_scrollbar: bool,
    save_state: SaveState,
    /// A write succeeded, so any snapshot still in flight predates it
    wrote_remote: bool,
}

impl ScrollbarToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self) -> bool {
        self.show_scrollbar
    }

    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.save_state, SaveState::Saving { .. })
    }

    /// The control accepts input only while idle.
    pub fn is_enabled(&self) -> bool {
        !self.is_saving()
    }

    /// Apply the result of the initial read.
    pub fn apply_loaded(&mut self, result: anyhow::Result<Option<SystemPreferences>>) {
        let prefs = match result {
            Ok(prefs) => prefs,
            Err(e) => {
                log::warn!("Failed to fetch system preferences: {:#}", e);
                return;
            }
        };

        let Some(settings) = prefs.and_then(|p| p.settings) else {
            return;
        };

        if self.is_saving() || self.wrote_remote {
            log::debug!("Ignoring preferences snapshot older than the user's change");
            return;
        }
        self.show_scrollbar = settings.show_scrollbar.unwrap_or(false);
    }

    /// Start a user toggle. Returns the patch to send, or `None` when a save
    /// is already in flight and the input is rejected.
    pub fn begin_toggle(&mut self, checked: bool) -> Option<SettingsPatch> {
        if let SaveState::Saving { .. } = self.save_state {
            log::debug!("Scrollbar toggle ignored while saving");
            return None;
        }

        self.save_state = SaveState::Saving { previous: self.show_scrollbar };
        self.show_scrollbar = checked;
        Some(SettingsPatch::show_scrollbar(checked))
    }

    /// Apply the result of the write started by [`Self::begin_toggle`].
    pub fn finish_save(&mut self, result: anyhow::Result<()>) {
        let SaveState::Saving { previous } = self.save_state else {
            log::warn!("Save result received with no save in flight");
            return;
        };

        match result {
            Ok(()) => self.wrote_remote = true,
            Err(e) => {
                log::error!("Failed to update system preferences: {:#}", e);
                self.show_scrollbar = previous;
            }
        }
        self.save_state = SaveState::Idle;
    }

    /// Blocking mount-time read.
    #[cfg(test)]
    pub fn load_from(&mut self, store: &dyn crate::PreferenceStore) {
        self.apply_loaded(store.read());
    }

    /// Blocking toggle: apply, write, roll back on failure.
    ///
    /// Returns `false` if the toggle was rejected.
    #[cfg(test)]
    pub fn toggle_with(&mut self, store: &dyn crate::PreferenceStore, checked: bool) -> bool {
        let Some(patch) = self.begin_toggle(checked) else {
            return false;
        };
        self.finish_save(store.write(&patch));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{PreferenceStore, SystemSettings};
    use std::sync::Mutex;

    /// In-memory store that records writes and can be told to fail.
    struct FakeStore {
        read: Mutex<Option<anyhow::Result<Option<SystemPreferences>>>>,
        fail_writes: bool,
        writes: Mutex<Vec<SettingsPatch>>,
    }

    impl FakeStore {
        fn with_read(read: anyhow::Result<Option<SystemPreferences>>) -> Self {
            Self {
                read: Mutex::new(Some(read)),
                fail_writes: false,
                writes: Mutex::new(Vec::new()),
            }
        }

        fn failing_writes() -> Self {
            Self { fail_writes: true, ..Self::with_read(Ok(None)) }
        }
    }

    impl PreferenceStore for FakeStore {
        fn read(&self) -> anyhow::Result<Option<SystemPreferences>> {
            self.read.lock().unwrap().take().unwrap_or(Ok(None))
        }

        fn write(&self, patch: &SettingsPatch) -> anyhow::Result<()> {
            self.writes.lock().unwrap().push(patch.clone());
            if self.fail_writes {
                anyhow::bail!("connection refused");
            }
            Ok(())
        }
    }

    fn prefs(show_scrollbar: Option<bool>) -> SystemPreferences {
        SystemPreferences {
            settings: Some(SystemSettings { show_scrollbar, ..Default::default() }),
        }
    }

    #[test]
    fn test_defaults_unchecked_and_idle() {
        let toggle = ScrollbarToggle::new();
        assert!(!toggle.is_checked());
        assert_eq!(toggle.save_state(), SaveState::Idle);
        assert!(toggle.is_enabled());
    }

    #[test]
    fn test_mount_reads_remote_value() {
        let mut toggle = ScrollbarToggle::new();
        toggle.load_from(&FakeStore::with_read(Ok(Some(prefs(Some(true))))));
        assert!(toggle.is_checked());
        assert!(!toggle.is_saving());
    }

    #[test]
    fn test_mount_missing_response_or_key_keeps_default() {
        for read in [
            Ok(None),
            Ok(Some(SystemPreferences { settings: None })),
            Ok(Some(prefs(None))),
            Err(anyhow::anyhow!("500")),
        ] {
            let mut toggle = ScrollbarToggle::new();
            toggle.load_from(&FakeStore::with_read(read));
            assert!(!toggle.is_checked());
        }
    }

    #[test]
    fn test_check_succeeds_stays_checked() {
        let store = FakeStore::with_read(Ok(None));
        let mut toggle = ScrollbarToggle::new();
        assert!(toggle.toggle_with(&store, true));
        assert!(toggle.is_checked());
        assert_eq!(toggle.save_state(), SaveState::Idle);
        assert_eq!(*store.writes.lock().unwrap(), [SettingsPatch::show_scrollbar(true)]);
    }

    #[test]
    fn test_uncheck_fails_reverts_to_checked() {
        let mut toggle = ScrollbarToggle::new();
        toggle.apply_loaded(Ok(Some(prefs(Some(true)))));

        let store = FakeStore::failing_writes();
        assert!(toggle.toggle_with(&store, false));
        assert!(toggle.is_checked());
        assert_eq!(toggle.save_state(), SaveState::Idle);
    }

    #[test]
    fn test_toggle_rejected_while_saving() {
        let mut toggle = ScrollbarToggle::new();
        let patch = toggle.begin_toggle(true);
        assert_eq!(patch, Some(SettingsPatch::show_scrollbar(true)));
        assert!(toggle.is_checked());
        assert!(!toggle.is_enabled());
        assert_eq!(toggle.save_state(), SaveState::Saving { previous: false });

        assert_eq!(toggle.begin_toggle(false), None);
        assert!(toggle.is_checked());

        let store = FakeStore::with_read(Ok(None));
        assert!(!toggle.toggle_with(&store, false));
        assert!(store.writes.lock().unwrap().is_empty());

        toggle.finish_save(Ok(()));
        assert!(toggle.is_enabled());
        assert!(toggle.is_checked());
    }

    #[test]
    fn test_late_mount_read_does_not_override_pending_save() {
        let mut toggle = ScrollbarToggle::new();
        toggle.begin_toggle(true);
        toggle.apply_loaded(Ok(Some(prefs(Some(false)))));
        assert!(toggle.is_checked());
    }

    #[test]
    fn test_mount_read_after_confirmed_save_is_stale() {
        let mut toggle = ScrollbarToggle::new();
        toggle.begin_toggle(true);
        toggle.finish_save(Ok(()));
        toggle.apply_loaded(Ok(Some(prefs(Some(false)))));
        assert!(toggle.is_checked());
        assert_eq!(toggle.save_state(), SaveState::Idle);
    }

    #[test]
    fn test_mount_read_after_failed_save_still_applies() {
        let mut toggle = ScrollbarToggle::new();
        toggle.begin_toggle(true);
        toggle.finish_save(Err(anyhow::anyhow!("HTTP 500")));
        assert!(!toggle.is_checked());

        // Nothing was written, so the server value is still current
        toggle.apply_loaded(Ok(Some(prefs(Some(true)))));
        assert!(toggle.is_checked());
    }

    #[test]
    fn test_stray_save_result_is_ignored() {
        let mut toggle = ScrollbarToggle::new();
        toggle.finish_save(Err(anyhow::anyhow!("late")));
        assert!(!toggle.is_checked());
        assert_eq!(toggle.save_state(), SaveState::Idle);
    }
}
