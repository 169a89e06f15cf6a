//! Process-wide active language.
//!
//! The value lives in a `tokio::sync::watch` channel so that UI code can
//! both read it synchronously and subscribe to changes. It starts out as the
//! canonical language and is never persisted.

use crate::i18n::Language;
use std::sync::OnceLock;
use tokio::sync::watch;
use tracing::info;

/// Global active-language channel (initialized lazily)
static ACTIVE: OnceLock<watch::Sender<Language>> = OnceLock::new();

fn sender() -> &'static watch::Sender<Language> {
    ACTIVE.get_or_init(|| watch::Sender::new(Language::canonical()))
}

/// Get the currently active language.
pub fn active_language() -> Language {
    *sender().borrow()
}

/// Make `language` the active language.
///
/// Later reads observe it immediately and subscribers are notified, even when
/// the value does not change.
pub fn set_active_language(language: Language) {
    let previous = sender().send_replace(language);
    if previous != language {
        info!("Active language changed: {} -> {}", previous, language);
    }
}

/// Switch to the other supported language and return it.
pub fn toggle_active_language() -> Language {
    let next = active_language().toggled();
    set_active_language(next);
    next
}

/// Subscribe to active-language changes.
///
/// The receiver starts with the current value marked as seen; use
/// `changed().await` to wait for the next `set_active_language`.
pub fn subscribe_language() -> watch::Receiver<Language> {
    sender().subscribe()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_set_then_read() {
        set_active_language(Language::ENGLISH);
        assert_eq!(active_language(), Language::ENGLISH);

        set_active_language(Language::POLISH);
        assert_eq!(active_language(), Language::POLISH);
    }

    #[test]
    #[serial]
    fn test_toggle_alternates() {
        set_active_language(Language::POLISH);

        assert_eq!(toggle_active_language(), Language::ENGLISH);
        assert_eq!(active_language(), Language::ENGLISH);
        assert_eq!(toggle_active_language(), Language::POLISH);
        assert_eq!(active_language(), Language::POLISH);
    }

    #[test]
    #[serial]
    fn test_subscriber_sees_current_value() {
        set_active_language(Language::ENGLISH);
        let receiver = subscribe_language();

        assert_eq!(*receiver.borrow(), Language::ENGLISH);

        set_active_language(Language::canonical());
    }

    #[tokio::test]
    #[serial]
    async fn test_subscriber_notified_on_change() {
        set_active_language(Language::POLISH);
        let mut receiver = subscribe_language();

        set_active_language(Language::ENGLISH);

        receiver.changed().await.expect("Sender should stay alive");
        assert_eq!(*receiver.borrow_and_update(), Language::ENGLISH);

        set_active_language(Language::POLISH);
    }

    #[test]
    #[serial]
    fn test_set_without_subscribers_does_not_panic() {
        // send_replace works with zero receivers
        set_active_language(Language::ENGLISH);
        set_active_language(Language::POLISH);
        assert_eq!(active_language(), Language::POLISH);
    }
}
