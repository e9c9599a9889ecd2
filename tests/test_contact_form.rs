//! Submission flow tests for the contact form.
//!
//! These tests drive `ContactForm` through its public API against a mock
//! collection and check the draft, the field errors, and whether the
//! collection was called.

mod mocks;

use contact_form::{
    ContactDraft, ContactForm, ErrorKind, Field, FormState, InMemoryContactBook, SubmitOutcome,
};
use mocks::MockContactCollection;

fn rosie() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_name("Rosie Simpson");
    form.set_number("459-12-56");
    form
}

#[test]
fn test_accepted_submit_clears_draft() {
    let mut collection = MockContactCollection::accepting();
    let mut form = rosie();

    let outcome = form.submit(&mut collection);

    match outcome {
        SubmitOutcome::Accepted(contact) => {
            assert_eq!(contact.name.as_str(), "Rosie Simpson");
            assert_eq!(contact.number.as_str(), "459-12-56");
        }
        other => panic!("Expected Accepted, got: {:?}", other),
    }
    assert_eq!(form.draft(), &ContactDraft::default());
    assert_eq!(form.errors().count(), 0);
    assert_eq!(
        collection.received(),
        &[ContactDraft::new("Rosie Simpson", "459-12-56")]
    );
}

#[test]
fn test_rejected_submit_keeps_draft() {
    let mut collection = MockContactCollection::rejecting();
    let mut form = rosie();

    let outcome = form.submit(&mut collection);

    assert!(matches!(outcome, SubmitOutcome::Duplicate(_)));
    assert_eq!(form.draft(), &ContactDraft::new("Rosie Simpson", "459-12-56"));

    let errors: Vec<_> = form.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::Name);
    assert_eq!(errors[0].kind, ErrorKind::DuplicateName);
    assert_eq!(errors[0].message, "Rosie Simpson is already in contacts.");
    assert_eq!(form.state(), FormState::Editing);
}

#[test]
fn test_invalid_fields_never_reach_collection() {
    let cases = [
        ("", "459-12-56", vec![(Field::Name, ErrorKind::Required)]),
        ("Rosie Simpson", "", vec![(Field::Number, ErrorKind::Required)]),
        ("Rosie_Simpson", "459-12-56", vec![(Field::Name, ErrorKind::InvalidFormat)]),
        ("Rosie Simpson", "459", vec![(Field::Number, ErrorKind::InvalidFormat)]),
        (
            "",
            "",
            vec![
                (Field::Name, ErrorKind::Required),
                (Field::Number, ErrorKind::Required),
            ],
        ),
    ];

    for (name, number, expected) in cases {
        let mut collection = MockContactCollection::accepting();
        let mut form = ContactForm::new();
        form.set_name(name);
        form.set_number(number);

        let outcome = form.submit(&mut collection);

        assert!(
            matches!(outcome, SubmitOutcome::Invalid(_)),
            "{name:?}/{number:?} should be invalid"
        );
        assert_eq!(collection.call_count(), 0);
        assert_eq!(form.draft(), &ContactDraft::new(name, number));

        let actual: Vec<_> = form.errors().map(|e| (e.field, e.kind)).collect();
        assert_eq!(actual, expected, "{name:?}/{number:?}");
    }
}

#[test]
fn test_retry_after_duplicate() {
    let mut collection = MockContactCollection::rejecting();
    let mut form = rosie();
    form.submit(&mut collection);

    form.set_name("Rosie Simpson Jr");
    assert!(form.error(Field::Name).is_none());

    collection.set_accept(true);
    let outcome = form.submit(&mut collection);

    assert!(outcome.is_accepted());
    assert_eq!(collection.call_count(), 2);
    assert_eq!(collection.received()[1].name, "Rosie Simpson Jr");
    assert!(form.draft().is_empty());
}

#[test]
fn test_reset_always_empties_form() {
    let mut form = ContactForm::new();
    form.reset();
    assert!(form.draft().is_empty());

    form.set_name("R2D2");
    form.set_number("nope");
    form.submit(&mut MockContactCollection::accepting());
    assert!(form.has_errors());

    form.reset();
    assert!(form.draft().is_empty());
    assert!(!form.has_errors());
    assert_eq!(form.submit_count(), 0);
    assert_eq!(form.state(), FormState::Editing);

    // After reset, edits no longer validate until the next submit
    form.set_name("R2D2");
    assert!(!form.has_errors());
}

#[test]
fn test_in_memory_book_as_parent_collection() {
    let mut book = InMemoryContactBook::new();
    let mut form = rosie();
    assert!(form.submit(&mut book).is_accepted());

    form.set_name("ROSIE SIMPSON");
    form.set_number("227-91-26");
    let outcome = form.submit(&mut book);

    assert_eq!(
        outcome.errors()[0].message,
        "ROSIE SIMPSON is already in contacts."
    );
    assert_eq!(book.len(), 1);
    assert_eq!(form.draft().number, "227-91-26");
}

#[test]
fn test_number_with_surrounding_text_is_accepted() {
    let mut collection = MockContactCollection::accepting();
    let mut form = ContactForm::new();
    form.set_name("Rosie Simpson");
    form.set_number("459-12-56 (work)");

    let outcome = form.submit(&mut collection);

    match outcome {
        SubmitOutcome::Accepted(contact) => {
            assert_eq!(contact.number.as_str(), "459-12-56 (work)");
        }
        other => panic!("Expected Accepted, got: {:?}", other),
    }
    assert_eq!(collection.call_count(), 1);
}
