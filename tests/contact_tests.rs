// Host-side tests for the contact channel: draft edits, validation and the
// submit cycle against fake delivery collaborators.

use portfolio_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct OkDelivery {
    calls: Cell<usize>,
    last: RefCell<Option<DeliveryRequest>>,
}

impl OkDelivery {
    fn new() -> Self {
        Self {
            calls: Cell::new(0),
            last: RefCell::new(None),
        }
    }
}

impl MessageDelivery for OkDelivery {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(request.clone());
        Ok(())
    }
}

struct FailingDelivery;

impl MessageDelivery for FailingDelivery {
    async fn deliver(&self, _request: &DeliveryRequest) -> Result<(), DeliveryError> {
        Err(DeliveryError::Rejected {
            status: 400,
            body: "The Public Key is invalid".into(),
        })
    }
}

/// Tries to submit again from inside the in-flight delivery.
struct ReentrantDelivery {
    channel: Rc<RefCell<ContactChannel>>,
    calls: Cell<usize>,
    second_attempt: Cell<Option<bool>>,
}

impl MessageDelivery for ReentrantDelivery {
    async fn deliver(&self, _request: &DeliveryRequest) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        let accepted = self.channel.borrow_mut().begin_submit().is_some();
        self.second_attempt.set(Some(accepted));
        Ok(())
    }
}

fn filled_channel() -> ContactChannel {
    let mut ch = ContactChannel::new(DeliveryConfig::default());
    ch.set_field(ContactField::Name, "Ada Lovelace");
    ch.set_field(ContactField::Email, "ada@example.com");
    ch.set_field(ContactField::Message, "Hello there");
    ch
}

#[test]
fn field_edit_replaces_only_that_field() {
    let mut ch = filled_channel();
    ch.set_field(ContactField::Email, "ada@analytical.engine");
    assert_eq!(ch.draft().name, "Ada Lovelace");
    assert_eq!(ch.draft().email, "ada@analytical.engine");
    assert_eq!(ch.draft().message, "Hello there");
}

#[test]
fn validation_errors_point_at_the_offending_field() {
    let mut draft = ContactSubmission {
        name: "   ".into(),
        email: "me@localhost".into(),
        message: "hi".into(),
    };
    let err = draft.validate().unwrap_err();
    assert_eq!(err, ValidationError::Missing(ContactField::Name));
    assert_eq!(err.field(), ContactField::Name);
    assert_eq!(err.to_string(), "name is required");

    draft.set(ContactField::Name, "Ada");
    let err = draft.validate().unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
    assert_eq!(err.field(), ContactField::Email);
}

#[test]
fn request_carries_draft_and_recipient_label() {
    let ch = filled_channel();
    let req = ch.request();
    assert_eq!(req.service_id, EMAILJS_SERVICE_ID);
    assert_eq!(req.template_id, EMAILJS_TEMPLATE_ID);
    assert_eq!(req.public_key, EMAILJS_PUBLIC_KEY);
    assert_eq!(req.param("from_name"), Some("Ada Lovelace"));
    assert_eq!(req.param("from_email"), Some("ada@example.com"));
    assert_eq!(req.param("message"), Some("Hello there"));
    assert_eq!(req.param("to_name"), Some(RECIPIENT_NAME));
    assert_eq!(req.template_params.len(), 4);
}

#[test]
fn successful_submit_goes_pending_then_success_and_clears_draft() {
    let channel = RefCell::new(filled_channel());
    let delivery = OkDelivery::new();
    let mut seen = Vec::new();
    let outcome = pollster::block_on(submit(&channel, &delivery, |ch| seen.push(ch.status())));

    assert_eq!(outcome, Some(SubmitStatus::Success));
    assert_eq!(seen, vec![SubmitStatus::Pending, SubmitStatus::Success]);
    assert_eq!(delivery.calls.get(), 1);
    assert_eq!(
        delivery.last.borrow().as_ref().and_then(|r| r.param("message").map(String::from)),
        Some("Hello there".to_string())
    );
    let ch = channel.borrow();
    assert_eq!(*ch.draft(), ContactSubmission::default());
    assert_eq!(ch.status().banner(), Some(SUCCESS_BANNER));
}

#[test]
fn failed_submit_goes_pending_then_error_and_preserves_draft() {
    let channel = RefCell::new(filled_channel());
    let before = channel.borrow().draft().clone();
    let mut seen = Vec::new();
    let outcome = pollster::block_on(submit(&channel, &FailingDelivery, |ch| seen.push(ch.status())));

    assert_eq!(outcome, Some(SubmitStatus::Error));
    assert_eq!(seen, vec![SubmitStatus::Pending, SubmitStatus::Error]);
    let ch = channel.borrow();
    assert_eq!(ch.draft(), &before);
    assert_eq!(ch.status().banner(), Some(ERROR_BANNER));
    assert!(matches!(
        ch.last_error(),
        Some(DeliveryError::Rejected { status: 400, .. })
    ));
}

#[test]
fn retry_after_failure_can_succeed() {
    let channel = RefCell::new(filled_channel());
    pollster::block_on(submit(&channel, &FailingDelivery, |_| {}));
    assert_eq!(channel.borrow().status(), SubmitStatus::Error);

    let delivery = OkDelivery::new();
    let outcome = pollster::block_on(submit(&channel, &delivery, |_| {}));
    assert_eq!(outcome, Some(SubmitStatus::Success));
    assert!(channel.borrow().last_error().is_none());
    assert_eq!(delivery.calls.get(), 1);
}

#[test]
fn second_submit_while_pending_is_suppressed() {
    let channel = Rc::new(RefCell::new(filled_channel()));
    let delivery = ReentrantDelivery {
        channel: channel.clone(),
        calls: Cell::new(0),
        second_attempt: Cell::new(None),
    };
    let outcome = pollster::block_on(submit(&channel, &delivery, |_| {}));

    assert_eq!(outcome, Some(SubmitStatus::Success));
    assert_eq!(delivery.calls.get(), 1);
    assert_eq!(delivery.second_attempt.get(), Some(false));
}

#[test]
fn begin_submit_twice_without_outcome_returns_none() {
    let mut ch = filled_channel();
    assert!(ch.begin_submit().is_some());
    assert!(ch.status().is_pending());
    assert!(ch.begin_submit().is_none());
    ch.finish_submit(Ok(()));
    assert!(!ch.status().is_pending());
    assert!(ch.begin_submit().is_some());
}

#[test]
fn submit_while_pending_does_not_call_delivery() {
    let channel = RefCell::new(filled_channel());
    channel.borrow_mut().begin_submit();
    let delivery = OkDelivery::new();
    let outcome = pollster::block_on(submit(&channel, &delivery, |_| panic!("no render expected")));
    assert_eq!(outcome, None);
    assert_eq!(delivery.calls.get(), 0);
}

#[test]
fn button_label_tracks_pending_state() {
    assert_eq!(SubmitStatus::Pending.button_label(), "Sending...");
    assert_eq!(SubmitStatus::Idle.button_label(), "Send Message");
    assert_eq!(SubmitStatus::Error.button_label(), "Send Message");
    assert_eq!(SubmitStatus::Idle.banner(), None);
    assert_eq!(SubmitStatus::Pending.banner(), None);
}

#[test]
fn validation_requires_every_field() {
    let mut draft = ContactSubmission::default();
    assert_eq!(draft.validate(), Err(ValidationError::Missing(ContactField::Name)));
    draft.set(ContactField::Name, "Ada");
    assert_eq!(draft.validate(), Err(ValidationError::Missing(ContactField::Email)));
    draft.set(ContactField::Email, "ada@example.com");
    draft.set(ContactField::Message, "   ");
    assert_eq!(draft.validate(), Err(ValidationError::Missing(ContactField::Message)));
    draft.set(ContactField::Message, "hi");
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn validation_rejects_malformed_email() {
    let mut draft = filled_channel().draft().clone();
    draft.set(ContactField::Email, "not-an-email");
    assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));
}

#[test]
fn email_shape_check() {
    for ok in ["a@b.co", "first.last@sub.example.org", " padded@example.com "] {
        assert!(is_valid_email(ok), "{ok}");
    }
    for bad in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@localhost",
        "user@.example.com",
        "user@example.com.",
        "user@exa..mple.com",
        "us er@example.com",
        "a@b@c.com",
    ] {
        assert!(!is_valid_email(bad), "{bad}");
    }
}

#[test]
fn validation_error_messages_name_the_field() {
    assert_eq!(
        ValidationError::Missing(ContactField::Email).to_string(),
        "email is required"
    );
}
