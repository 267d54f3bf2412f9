use folio_core::handler::contact::{submit, MISSING_FIELDS_MESSAGE};
use folio_core::{ContactForm, ContactSubmission, Page, Tone};

#[test]
fn any_empty_field_yields_the_fixed_error() {
    let cases = [
        ("", "a@b.c", "msg"),
        ("Ann", "", "msg"),
        ("Ann", "a@b.c", ""),
        ("", "", ""),
    ];
    for (name, email, message) in cases {
        let mut page = Page::default();
        let submission = ContactSubmission::new(name, email, message);
        submit(&mut page, &submission).expect_err("empty field must be rejected");

        let shown = page.form_message.clone().expect("message shown");
        assert_eq!(shown.text, MISSING_FIELDS_MESSAGE);
        assert_eq!(shown.tone, Tone::Error);
        assert_eq!(page.form.name, name);
        assert_eq!(page.form.email, email);
        assert_eq!(page.form.message, message);
    }
}

#[test]
fn filled_fields_greet_by_exact_name_and_clear() {
    for name in ["Ann", "  spaced  ", "<b>Bold</b>", "Zoë"] {
        let mut page = Page::default();
        submit(&mut page, &ContactSubmission::new(name, "not-an-email", "m"))
            .expect("no format validation");

        let shown = page.form_message.clone().expect("message shown");
        assert_eq!(shown.tone, Tone::Success);
        assert!(shown.text.contains(name));
        assert_eq!(page.form, ContactForm::default());
    }
}
