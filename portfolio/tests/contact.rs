mod common;

use common::RecordingNotifier;
use pretty_assertions::assert_eq;
use portfolio::config::SiteConfig;
use portfolio::contact::ContactForm;

#[test]
fn empty_form_is_acknowledged_once() {
    let notifier = RecordingNotifier::default();
    let ack = SiteConfig::default().acknowledgement;

    ContactForm::default().submit(&notifier, &ack);

    assert_eq!(*notifier.shown.borrow(), vec!["Message sent! (This is a demo)".to_owned()]);
}

#[test]
fn field_contents_never_change_the_outcome() {
    let forms = [
        ContactForm {
            name: "Ama".to_owned(),
            email: "ama@example.com".to_owned(),
            message: "Hello!".to_owned(),
        },
        ContactForm {
            name: String::new(),
            email: "not an email".to_owned(),
            message: "x".repeat(10_000),
        },
        ContactForm {
            name: "<script>".to_owned(),
            ..ContactForm::default()
        },
    ];

    for form in forms {
        let notifier = RecordingNotifier::default();
        form.submit(&notifier, "ack");
        assert_eq!(*notifier.shown.borrow(), vec!["ack".to_owned()]);
    }
}

#[test]
fn failed_dialog_is_not_retried() {
    let notifier = RecordingNotifier {
        broken: true,
        ..RecordingNotifier::default()
    };

    ContactForm::default().submit(&notifier, "ack");

    assert_eq!(notifier.shown.borrow().len(), 1);
}
