use crate::commands::CmdResult;
use crate::config::PinbookConfig;
use crate::error::Result;
use crate::index::{DisplayRecord, RecordSelector};
use crate::share::{code_payload, email_link, message_link, share_text, ShareTarget};
use crate::store::DataStore;

use super::helpers::record_by_selector;

/// Everything a UI needs to deliver a shared record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub target: ShareTarget,
    pub record: DisplayRecord,
    /// Name plus labelled identifier.
    pub text: String,
    /// `sms:` or `mailto:` link for message and email targets.
    pub link: Option<String>,
    /// Value to render as a scannable code.
    pub code: Option<String>,
}

impl SharePayload {
    /// What ends up at the target: the link if there is one, else the code or text.
    pub fn content(&self) -> &str {
        self.link
            .as_deref()
            .or(self.code.as_deref())
            .unwrap_or(&self.text)
    }
}

/// Builds the payload. Delivering it (clipboard, opening links) is up to the caller.
pub fn run<S: DataStore>(
    store: &S,
    config: &PinbookConfig,
    selector: &RecordSelector,
    target: ShareTarget,
) -> Result<CmdResult> {
    let record = record_by_selector(store, selector)?;
    let text = share_text(&record.record, &config.identifier_label);

    let (link, code) = match target {
        ShareTarget::Clipboard => (None, None),
        ShareTarget::Message => (Some(message_link(&text)), None),
        ShareTarget::Email => (Some(email_link(&config.email_subject, &text)), None),
        ShareTarget::Code => (None, Some(code_payload(&record.record).to_string())),
    };

    Ok(CmdResult::default().with_share(SharePayload {
        target,
        record,
        text,
        link,
        code,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::seeded_store;
    use crate::index::DisplayIndex;

    fn first() -> RecordSelector {
        RecordSelector::Index(DisplayIndex(1))
    }

    fn share(target: ShareTarget, config: &PinbookConfig) -> SharePayload {
        let (store, _) = seeded_store();
        run(&store, config, &first(), target)
            .unwrap()
            .share
            .unwrap()
    }

    #[test]
    fn clipboard_gets_plain_text() {
        let payload = share(ShareTarget::Clipboard, &PinbookConfig::default());
        assert_eq!(payload.content(), "Jane Doe\nPIN: A12 3456 789");
        assert!(payload.link.is_none());
    }

    #[test]
    fn message_gets_sms_link() {
        let payload = share(ShareTarget::Message, &PinbookConfig::default());
        assert_eq!(
            payload.content(),
            "sms:?body=Jane%20Doe%0APIN%3A%20A12%203456%20789"
        );
    }

    #[test]
    fn email_uses_configured_subject_and_label() {
        let mut config = PinbookConfig::default();
        config.set("email-subject", "Card").unwrap();
        config.set("identifier-label", "No").unwrap();
        let payload = share(ShareTarget::Email, &config);
        assert_eq!(
            payload.content(),
            "mailto:?subject=Card&body=Jane%20Doe%0ANo%3A%20A12%203456%20789"
        );
    }

    #[test]
    fn code_carries_identifier_only() {
        let payload = share(ShareTarget::Code, &PinbookConfig::default());
        assert_eq!(payload.content(), "A12 3456 789");
        assert_eq!(payload.record.index, DisplayIndex(1));
    }
}
