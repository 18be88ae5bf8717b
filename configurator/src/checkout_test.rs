use super::*;

fn filled_form() -> CheckoutForm {
    let mut form = CheckoutForm::default();
    form.set(CheckoutField::FullName, "Sarah Chen");
    form.set(CheckoutField::Whatsapp, "+62 812 3456 7890");
    form.set(CheckoutField::Address, "Jl. Pantai Berawa No. 42, Canggu");
    form.set(CheckoutField::MoveInDate, "2026-11-01");
    form
}

// =============================================================
// CheckoutForm
// =============================================================

#[test]
fn empty_form_is_invalid_starting_at_name() {
    let form = CheckoutForm::default();
    assert!(!form.is_valid());
    assert_eq!(form.first_missing(), Some(CheckoutField::FullName));
}

#[test]
fn filled_form_is_valid() {
    assert!(filled_form().is_valid());
}

#[test]
fn whitespace_only_text_is_missing() {
    let mut form = filled_form();
    form.set(CheckoutField::Address, "   ");
    assert_eq!(form.first_missing(), Some(CheckoutField::Address));
}

#[test]
fn set_and_get_round_trip_each_field() {
    let mut form = CheckoutForm::default();
    for field in CheckoutField::ALL {
        form.set(field, field.label());
        assert_eq!(form.get(field), field.label());
    }
}

#[test]
fn field_metadata() {
    assert_eq!(CheckoutField::Whatsapp.input_type(), "tel");
    assert_eq!(CheckoutField::MoveInDate.input_type(), "date");
    assert_eq!(CheckoutField::MoveInDate.placeholder(), "");
    assert_eq!(CheckoutField::FullName.label(), "Full Name");
}

// =============================================================
// CheckoutSession
// =============================================================

#[test]
fn submit_rejects_first_missing_field() {
    let mut session = CheckoutSession::default();
    session.form.set(CheckoutField::FullName, "Sarah");
    let err = session.submit().unwrap_err();
    assert_eq!(err, CheckoutError::MissingField(CheckoutField::Whatsapp));
    assert_eq!(err.to_string(), "WhatsApp Number is required");
    assert!(!session.is_submitted());
}

#[test]
fn submit_valid_form_moves_to_submitted() {
    let mut session = CheckoutSession { form: filled_form(), step: CheckoutStep::Form };
    session.submit().unwrap();
    assert!(session.is_submitted());
}

#[test]
fn reset_keeps_drafts() {
    let mut session = CheckoutSession { form: filled_form(), step: CheckoutStep::Form };
    session.submit().unwrap();
    session.reset();
    assert_eq!(session.step, CheckoutStep::Form);
    assert_eq!(session.form, filled_form());
}
