use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use codee::{string::JsonSerdeCodec, Encoder};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RECIPIENT: &str = "alexandregarciassj@outlook.com";
pub const DEFAULT_SUBJECT: &str = "Contato do Portfólio";
pub const STORAGE_KEY: &str = "lastContactForm";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("field is required: {0}")]
    MissingField(&'static str),
}

impl ContactSubmission {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        match fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(field)),
            None => Ok(()),
        }
    }

    fn body(&self) -> String {
        format!(
            "Nome: {}\nEmail: {}\n\nMensagem:\n{}",
            self.name, self.email, self.message
        )
    }
}

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoUri(String);

impl MailtoUri {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MailtoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn compose_mail_uri(record: &ContactSubmission) -> MailtoUri {
    let subject = if record.subject.is_empty() {
        DEFAULT_SUBJECT
    } else {
        &record.subject
    };
    MailtoUri(format!(
        "mailto:{RECIPIENT}?subject={}&body={}",
        encode_uri_component(subject),
        encode_uri_component(&record.body())
    ))
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("could not open external link: {0}")]
    Open(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not encode record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write to storage: {0}")]
    Write(String),
}

/// Hands a URI to whatever the platform uses for external links.
pub trait ExternalOpener {
    fn open_external(&self, uri: &str) -> Result<(), PlatformError>;
}

pub trait SubmissionStore {
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: SubmissionStore + ?Sized> SubmissionStore for Rc<S> {
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

pub trait Scheduler {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Overwrites the single stored submission.
pub fn save_submission<S: SubmissionStore + ?Sized>(
    store: &S,
    record: &ContactSubmission,
) -> Result<(), StorageError> {
    let encoded = JsonSerdeCodec::encode(record)?;
    store.write(STORAGE_KEY, &encoded)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    MailClientOpened,
    MailClientFailed(PlatformError),
}

pub struct ContactComposer<O, S, T> {
    opener: O,
    store: S,
    timer: T,
    delay: Duration,
}

impl<O, S, T> ContactComposer<O, S, T>
where
    O: ExternalOpener,
    S: SubmissionStore + Clone + 'static,
    T: Scheduler,
{
    pub fn new(opener: O, store: S, timer: T, delay: Duration) -> Self {
        Self {
            opener,
            store,
            timer,
            delay,
        }
    }

    /// Opens the mail client right away; `on_complete` runs after the delay,
    /// followed by the storage write.
    pub fn submit(
        &self,
        record: ContactSubmission,
        on_complete: impl FnOnce(SubmitOutcome) + 'static,
    ) -> MailtoUri {
        let uri = compose_mail_uri(&record);
        let outcome = match self.opener.open_external(uri.as_str()) {
            Ok(()) => SubmitOutcome::MailClientOpened,
            Err(err) => {
                log::warn!("contact: {err}");
                SubmitOutcome::MailClientFailed(err)
            }
        };

        let store = self.store.clone();
        self.timer.defer(
            self.delay,
            Box::new(move || {
                on_complete(outcome);
                if let Err(err) = save_submission(&store, &record) {
                    log::warn!("contact: last submission not saved: {err}");
                }
            }),
        );
        uri
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use codee::Decoder;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
        fail: bool,
    }

    impl SubmissionStore for MemoryStore {
        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail {
                return Err(StorageError::Write("quota exceeded".to_string()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    impl MemoryStore {
        fn last(&self) -> Option<ContactSubmission> {
            let entries = self.entries.borrow();
            let raw = entries.get(STORAGE_KEY)?;
            JsonSerdeCodec::decode(raw.as_str()).ok()
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ExternalOpener for &RecordingOpener {
        fn open_external(&self, uri: &str) -> Result<(), PlatformError> {
            if self.fail {
                return Err(PlatformError::Open("no handler".to_string()));
            }
            self.opened.borrow_mut().push(uri.to_string());
            Ok(())
        }
    }

    type Task = (Duration, Box<dyn FnOnce()>);

    #[derive(Default)]
    struct ManualTimer {
        pending: RefCell<Vec<Task>>,
    }

    impl ManualTimer {
        fn advance(&self, elapsed: Duration) {
            let due = {
                let mut pending = self.pending.borrow_mut();
                let (due, rest): (Vec<Task>, Vec<Task>) =
                    pending.drain(..).partition(|(d, _)| *d <= elapsed);
                *pending = rest;
                due
            };
            for (_, task) in due {
                task();
            }
        }
    }

    impl Scheduler for &ManualTimer {
        fn defer(&self, delay: Duration, task: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((delay, task));
        }
    }

    fn ana() -> ContactSubmission {
        ContactSubmission {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            subject: String::new(),
            message: "Oi".to_string(),
        }
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("abcXYZ019"), "abcXYZ019");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("ana@x.com"), "ana%40x.com");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("Portfólio"), "Portf%C3%B3lio");
        assert_eq!(encode_uri_component("Olá 👋"), "Ol%C3%A1%20%F0%9F%91%8B");
        assert_eq!(encode_uri_component(""), "");
        // reserved URI characters are escaped too
        assert_eq!(
            encode_uri_component("/?#[]@$+,;:"),
            "%2F%3F%23%5B%5D%40%24%2B%2C%3B%3A"
        );
    }

    #[test]
    fn test_empty_subject_uses_default() {
        let uri = compose_mail_uri(&ana());
        assert_eq!(
            uri.as_str(),
            "mailto:alexandregarciassj@outlook.com\
             ?subject=Contato%20do%20Portf%C3%B3lio\
             &body=Nome%3A%20Ana%0AEmail%3A%20ana%40x.com%0A%0AMensagem%3A%0AOi"
        );
    }

    #[test]
    fn test_subject_is_encoded() {
        let record = ContactSubmission {
            subject: "Orçamento & prazo".to_string(),
            ..ana()
        };
        let uri = compose_mail_uri(&record);
        assert!(uri
            .as_str()
            .contains("?subject=Or%C3%A7amento%20%26%20prazo&body="));
    }

    #[test]
    fn test_submit_completes_after_delay() {
        let opener = RecordingOpener::default();
        let store = Rc::new(MemoryStore::default());
        let timer = ManualTimer::default();
        let composer = ContactComposer::new(
            &opener,
            Rc::clone(&store),
            &timer,
            Duration::from_millis(1000),
        );

        let outcome = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&outcome);
        let uri = composer.submit(ana(), move |o| *sink.borrow_mut() = Some(o));

        // the mail client opens immediately
        assert_eq!(*opener.opened.borrow(), vec![uri.to_string()]);
        assert!(outcome.borrow().is_none());
        assert!(store.last().is_none());

        timer.advance(Duration::from_millis(999));
        assert!(outcome.borrow().is_none());

        timer.advance(Duration::from_millis(1000));
        assert_eq!(*outcome.borrow(), Some(SubmitOutcome::MailClientOpened));
        // stored verbatim, empty subject included
        assert_eq!(store.last(), Some(ana()));
    }

    #[test]
    fn test_later_submission_overwrites() {
        let opener = RecordingOpener::default();
        let store = Rc::new(MemoryStore::default());
        let timer = ManualTimer::default();
        let composer =
            ContactComposer::new(&opener, Rc::clone(&store), &timer, Duration::from_secs(1));

        composer.submit(ana(), |_| {});
        let second = ContactSubmission {
            name: "Bruno".to_string(),
            subject: "Projeto".to_string(),
            ..ana()
        };
        composer.submit(second.clone(), |_| {});
        timer.advance(Duration::from_secs(1));

        assert_eq!(store.entries.borrow().len(), 1);
        assert_eq!(store.last(), Some(second));
    }

    #[test]
    fn test_open_failure_is_reported() {
        let opener = RecordingOpener {
            fail: true,
            ..Default::default()
        };
        let store = Rc::new(MemoryStore::default());
        let timer = ManualTimer::default();
        let composer =
            ContactComposer::new(&opener, Rc::clone(&store), &timer, Duration::from_secs(1));

        let outcome = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&outcome);
        composer.submit(ana(), move |o| *sink.borrow_mut() = Some(o));
        timer.advance(Duration::from_secs(1));

        assert!(matches!(
            *outcome.borrow(),
            Some(SubmitOutcome::MailClientFailed(PlatformError::Open(_)))
        ));
        // the record is still kept
        assert_eq!(store.last(), Some(ana()));
    }

    #[test]
    fn test_storage_failure_is_not_fatal() {
        let opener = RecordingOpener::default();
        let store = Rc::new(MemoryStore {
            fail: true,
            ..Default::default()
        });
        let timer = ManualTimer::default();
        let composer =
            ContactComposer::new(&opener, Rc::clone(&store), &timer, Duration::from_secs(1));

        let done = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&done);
        composer.submit(ana(), move |_| *flag.borrow_mut() = true);
        timer.advance(Duration::from_secs(1));

        assert!(*done.borrow());
        assert!(store.last().is_none());
        assert!(save_submission(&*store, &ana()).is_err());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(ana().validate(), Err(ContactError::MissingField("subject")));
        let complete = ContactSubmission {
            subject: "Oi".to_string(),
            ..ana()
        };
        assert_eq!(complete.validate(), Ok(()));
        assert_eq!(
            ContactSubmission::default().validate(),
            Err(ContactError::MissingField("name"))
        );
    }
}
