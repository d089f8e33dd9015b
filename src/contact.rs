//! Contact form state and submission.
//!
//! The form moves `Idle -> Pending -> Success | Error -> Idle`. Every
//! submission gets a [`Ticket`]; completions and banner clears carrying an
//! outdated ticket are dropped, which is what keeps a slow or abandoned
//! submission from overwriting newer state.

use std::fmt;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Value of the input's `id`/`name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("message could not be delivered: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = Field::ALL.into_iter().find(|f| self.get(*f).trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !s.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Outcome of asking the form to submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Send `message`, then report back with `ticket`.
    Started {
        ticket: Ticket,
        message: ContactMessage,
    },
    /// Input was invalid; the error banner is up and should be cleared with `ticket`.
    Rejected { ticket: Ticket, error: ContactError },
    /// A submission is already in flight.
    Busy,
}

/// A state change produced by a running submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormUpdate {
    Finished(Ticket, Result<(), ContactError>),
    ClearStatus(Ticket),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    message: ContactMessage,
    status: SubmitStatus,
    error: Option<ContactError>,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        self.message.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.message.get_mut(field) = value.into();
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Pending
    }

    pub fn begin_submit(&mut self) -> Submission {
        if self.is_submitting() {
            return Submission::Busy;
        }
        self.generation += 1;
        let ticket = Ticket(self.generation);
        match self.message.validate() {
            Ok(()) => {
                self.status = SubmitStatus::Pending;
                self.error = None;
                log::debug!("contact submission {} started", self.generation);
                Submission::Started {
                    ticket,
                    message: self.message.clone(),
                }
            }
            Err(error) => {
                log::debug!("contact submission rejected: {error}");
                self.status = SubmitStatus::Error;
                self.error = Some(error.clone());
                Submission::Rejected { ticket, error }
            }
        }
    }

    /// Applies an update. Returns false when the ticket is stale and nothing changed.
    pub fn apply(&mut self, update: FormUpdate) -> bool {
        match update {
            FormUpdate::Finished(ticket, result) => self.finish(ticket, result),
            FormUpdate::ClearStatus(ticket) => self.clear_status(ticket),
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    fn finish(&mut self, ticket: Ticket, result: Result<(), ContactError>) -> bool {
        if !self.is_current(ticket) || !self.is_submitting() {
            return false;
        }
        match result {
            Ok(()) => {
                log::info!("contact message sent");
                self.status = SubmitStatus::Success;
                self.error = None;
                self.message = ContactMessage::default();
            }
            Err(e) => {
                log::warn!("contact message failed: {e}");
                self.status = SubmitStatus::Error;
                self.error = Some(e);
            }
        }
        true
    }

    fn clear_status(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket)
            || !matches!(self.status, SubmitStatus::Success | SubmitStatus::Error)
        {
            return false;
        }
        self.status = SubmitStatus::Idle;
        self.error = None;
        true
    }
}

/// Delivers a contact message somewhere.
pub trait MessageSender {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), ContactError>>;
}

/// Source of the delays used while a submission runs.
pub trait Timer: Clone + 'static {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Stands in for a real endpoint: waits, then reports success.
#[derive(Debug, Clone)]
pub struct SimulatedSender<T> {
    pub delay: Duration,
    pub timer: T,
}

impl<T: Timer> MessageSender for SimulatedSender<T> {
    fn send(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), ContactError>> {
        let wait = self.timer.sleep(self.delay);
        async move {
            log::debug!("simulating delivery of {:?} from {}", message.subject, message.email);
            wait.await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Runs a started submission to the end: sends, reports the result, waits, clears the banner.
///
/// `apply` hands each update to the form and returns `None` once the form no
/// longer exists, which ends the run early.
pub async fn drive_submission<S, T, A>(
    sender: &S,
    timer: T,
    ticket: Ticket,
    message: ContactMessage,
    clear_after: Duration,
    mut apply: A,
) where
    S: MessageSender + ?Sized,
    T: Timer,
    A: FnMut(FormUpdate) -> Option<bool>,
{
    let result = sender.send(message).await;
    match apply(FormUpdate::Finished(ticket, result)) {
        Some(true) => {}
        Some(false) => return,
        None => {
            log::debug!("contact form gone before submission finished");
            return;
        }
    }
    clear_banner(timer, ticket, clear_after, apply).await;
}

/// Waits `after`, then clears the banner left by `ticket`.
pub async fn clear_banner<T, A>(timer: T, ticket: Ticket, after: Duration, mut apply: A)
where
    T: Timer,
    A: FnMut(FormUpdate) -> Option<bool>,
{
    timer.sleep(after).await;
    apply(FormUpdate::ClearStatus(ticket));
}

/// The page's clock: `setTimeout` in the browser, tokio on the server.
#[cfg(any(feature = "hydrate", feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTimer;

#[cfg(feature = "hydrate")]
impl Timer for PageTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        leptos::prelude::set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        async move {
            let _ = rx.await;
        }
        .boxed_local()
    }
}

#[cfg(all(feature = "ssr", not(feature = "hydrate")))]
impl Timer for PageTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;

    use super::*;

    /// Resolves every sleep at once.
    #[derive(Clone)]
    struct NoWait;

    impl Timer for NoWait {
        fn sleep(&self, _: Duration) -> LocalBoxFuture<'static, ()> {
            async {}.boxed_local()
        }
    }

    /// Holds every sleep until the test fires it.
    #[derive(Clone, Default)]
    struct ManualTimer {
        waiting: Rc<RefCell<Vec<(Duration, oneshot::Sender<()>)>>>,
    }

    impl ManualTimer {
        /// Wakes the oldest sleeper and returns how long it asked to wait.
        fn fire(&self) -> Duration {
            let (duration, tx) = self.waiting.borrow_mut().remove(0);
            let _ = tx.send(());
            duration
        }

        fn pending(&self) -> usize {
            self.waiting.borrow().len()
        }
    }

    impl Timer for ManualTimer {
        fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
            let (tx, rx) = oneshot::channel();
            self.waiting.borrow_mut().push((duration, tx));
            async move {
                let _ = rx.await;
            }
            .boxed_local()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Subject, "Hello");
        form.set_field(Field::Message, "Nice site");
        form
    }

    struct FailingSender;

    impl MessageSender for FailingSender {
        fn send(&self, _: ContactMessage) -> LocalBoxFuture<'static, Result<(), ContactError>> {
            async { Err(ContactError::Delivery("offline".to_string())) }.boxed_local()
        }
    }

    #[test]
    fn test_submit_goes_pending_success_idle() {
        let form = Rc::new(RefCell::new(filled()));
        let Submission::Started { ticket, message } = form.borrow_mut().begin_submit() else {
            panic!("submission should start");
        };

        let timer = ManualTimer::default();
        let sender = SimulatedSender {
            delay: Duration::from_millis(1500),
            timer: timer.clone(),
        };
        let mut pool = LocalPool::new();
        let handle = form.clone();
        let clock = timer.clone();
        pool.spawner()
            .spawn_local(async move {
                drive_submission(&sender, clock, ticket, message, Duration::from_secs(5), |u| {
                    Some(handle.borrow_mut().apply(u))
                })
                .await;
            })
            .unwrap();

        pool.run_until_stalled();
        assert_eq!(form.borrow().status(), SubmitStatus::Pending);
        assert_eq!(timer.pending(), 1);

        assert_eq!(timer.fire(), Duration::from_millis(1500));
        pool.run_until_stalled();
        assert_eq!(form.borrow().status(), SubmitStatus::Success);
        assert_eq!(form.borrow().field(Field::Name), "");
        assert_eq!(form.borrow().field(Field::Message), "");

        // success banner holds until the clear delay elapses
        pool.run_until_stalled();
        assert_eq!(form.borrow().status(), SubmitStatus::Success);
        assert_eq!(timer.fire(), Duration::from_secs(5));
        pool.run_until_stalled();
        assert_eq!(form.borrow().status(), SubmitStatus::Idle);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn test_busy_while_pending() {
        let mut form = filled();
        assert!(matches!(form.begin_submit(), Submission::Started { .. }));
        assert_eq!(form.begin_submit(), Submission::Busy);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_delivery_failure_shows_error_and_keeps_fields() {
        let form = RefCell::new(filled());
        let Submission::Started { ticket, message } = form.borrow_mut().begin_submit() else {
            panic!("submission should start");
        };
        let seen = RefCell::new(Vec::new());
        block_on(drive_submission(
            &FailingSender,
            NoWait,
            ticket,
            message,
            Duration::ZERO,
            |update| {
                let applied = form.borrow_mut().apply(update);
                seen.borrow_mut().push((form.borrow().status(), form.borrow().error().cloned()));
                Some(applied)
            },
        ));
        let seen = seen.into_inner();
        assert_eq!(seen[0].0, SubmitStatus::Error);
        assert_eq!(seen[0].1, Some(ContactError::Delivery("offline".to_string())));
        assert_eq!(seen[1], (SubmitStatus::Idle, None));
        assert_eq!(form.borrow().field(Field::Name), "Ada");
    }

    #[test]
    fn test_unmounted_form_discards_completion() {
        let mut form = filled();
        let Submission::Started { ticket, message } = form.begin_submit() else {
            panic!("submission should start");
        };
        let calls = RefCell::new(0);
        let sender = SimulatedSender {
            delay: Duration::ZERO,
            timer: NoWait,
        };
        block_on(drive_submission(&sender, NoWait, ticket, message, Duration::ZERO, |_| {
            *calls.borrow_mut() += 1;
            None
        }));
        // gone after the first update, so no clear is attempted
        assert_eq!(calls.into_inner(), 1);
        assert_eq!(form.status(), SubmitStatus::Pending);
    }

    #[test]
    fn test_stale_clear_is_ignored() {
        let mut form = filled();
        let Submission::Started { ticket: first, .. } = form.begin_submit() else {
            panic!("submission should start");
        };
        assert!(form.apply(FormUpdate::Finished(first, Ok(()))));

        for field in Field::ALL {
            form.set_field(field, "again@example.com");
        }
        let Submission::Started { ticket: second, .. } = form.begin_submit() else {
            panic!("second submission should start");
        };
        assert!(!form.apply(FormUpdate::ClearStatus(first)));
        assert!(!form.apply(FormUpdate::Finished(first, Ok(()))));
        assert_eq!(form.status(), SubmitStatus::Pending);
        assert!(form.apply(FormUpdate::Finished(second, Ok(()))));
        assert!(form.apply(FormUpdate::ClearStatus(second)));
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let mut form = filled();
        form.set_field(Field::Subject, "   ");
        match form.begin_submit() {
            Submission::Rejected { ticket, error } => {
                assert_eq!(error, ContactError::MissingField(Field::Subject));
                assert_eq!(form.status(), SubmitStatus::Error);
                assert!(form.apply(FormUpdate::ClearStatus(ticket)));
                assert_eq!(form.status(), SubmitStatus::Idle);
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_email_validation() {
        let mut msg = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert_eq!(msg.validate(), Ok(()));
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a da@example.com", "a@b@c.d"] {
            msg.email = bad.to_string();
            assert!(
                matches!(msg.validate(), Err(ContactError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Your Email is required"
        );
        assert_eq!(Field::Message.key(), "message");
    }
}
