use serde::Serialize;

use crate::form::{FieldError, FormController, FormModel, FormOptions, FormResult, rules};

/// The contact form on `/support`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, FormModel)]
pub struct SupportForm {
    pub name: String,
    pub designation: String,
    pub company: String,
    pub industry: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl SupportForm {
    pub const ACKNOWLEDGMENT: &'static str = "Your message has been submitted successfully!";

    pub fn controller() -> FormResult<FormController<SupportForm, FieldError>> {
        let controller = FormController::new(SupportForm::default(), FormOptions::default());
        let fields = SupportForm::fields();

        controller.register_field_validator(
            fields.name(),
            |_model: &SupportForm, value: &String| rules::required(value, "Name is required"),
        )?;
        controller.register_field_validator(
            fields.designation(),
            |_model: &SupportForm, value: &String| {
                rules::required(value, "Designation is required")
            },
        )?;
        controller.register_field_validator(
            fields.phone(),
            |_model: &SupportForm, value: &String| {
                rules::required(value, "Phone number is required")?;
                rules::phone(value, "Phone number must be 10 digits")
            },
        )?;
        controller.register_field_validator(
            fields.email(),
            |_model: &SupportForm, value: &String| {
                rules::required(value, "Email is required")?;
                rules::email(value, "Enter a valid email address")
            },
        )?;

        controller.register_required_field(fields.name())?;
        controller.register_required_field(fields.designation())?;
        controller.register_required_field(fields.phone())?;
        controller.register_required_field(fields.email())?;

        controller.register_placeholder(fields.name(), "Name*")?;
        controller.register_placeholder(fields.designation(), "Designation*")?;
        controller.register_placeholder(fields.company(), "Company Name")?;
        controller.register_placeholder(fields.industry(), "Industry Vertical")?;
        controller.register_placeholder(fields.phone(), "Mobile No*")?;
        controller.register_placeholder(fields.email(), "you@example.com")?;
        controller.register_placeholder(fields.message(), "Message")?;

        Ok(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldLens, RecordingSink, ValidationError};

    fn fill_valid(controller: &FormController<SupportForm, FieldError>) {
        let fields = SupportForm::fields();
        controller.set(fields.name(), "Jane Doe".into()).expect("set name");
        controller
            .set(fields.designation(), "CTO".into())
            .expect("set designation");
        controller
            .set(fields.phone(), "9876543210".into())
            .expect("set phone");
        controller
            .set(fields.email(), "jane@example.com".into())
            .expect("set email");
    }

    #[test]
    fn required_fields_surface_their_messages() {
        let controller = SupportForm::controller().expect("controller");
        let fields = SupportForm::fields();
        assert!(!controller.validate_form().expect("validate"));

        let errors = controller.error_state().expect("error state");
        assert_eq!(
            errors.get(&fields.name().key()).map(|e| e.message()),
            Some("Name is required".into())
        );
        assert_eq!(
            errors.get(&fields.designation().key()).map(|e| e.message()),
            Some("Designation is required".into())
        );
        assert_eq!(
            errors.get(&fields.phone().key()).map(|e| e.message()),
            Some("Phone number is required".into())
        );
        assert_eq!(
            errors.get(&fields.email().key()).map(|e| e.message()),
            Some("Email is required".into())
        );
    }

    #[test]
    fn company_industry_and_message_are_optional() {
        let controller = SupportForm::controller().expect("controller");
        fill_valid(&controller);
        assert!(controller.validate_form().expect("validate"));
        assert!(controller.error_state().expect("error state").is_empty());
    }

    #[test]
    fn placeholders_mirror_the_page_copy() {
        let controller = SupportForm::controller().expect("controller");
        let fields = SupportForm::fields();
        assert_eq!(
            controller.placeholder(fields.email()).expect("placeholder"),
            Some("you@example.com".into())
        );
        assert_eq!(
            controller.placeholder(fields.industry()).expect("placeholder"),
            Some("Industry Vertical".into())
        );
        assert!(controller.is_required(fields.designation()).expect("required"));
        assert!(!controller.is_required(fields.company()).expect("required"));
    }

    #[test]
    fn ten_digit_phone_rule_applies() {
        let controller = SupportForm::controller().expect("controller");
        let fields = SupportForm::fields();
        fill_valid(&controller);
        controller
            .set(fields.phone(), "+919876543210".into())
            .expect("set phone");

        controller.validate_form().expect("validate");
        assert_eq!(
            controller
                .error_state()
                .expect("error state")
                .get(&fields.phone().key())
                .map(|e| e.message()),
            Some("Phone number must be 10 digits".into())
        );
    }

    #[test]
    fn successful_submit_resets_and_acknowledges() {
        let controller = SupportForm::controller().expect("controller");
        let fields = SupportForm::fields();
        let sink = RecordingSink::new();
        fill_valid(&controller);
        controller
            .set(fields.message(), "Please call back".into())
            .expect("set message");

        let receipt = controller
            .submit_to(&sink, SupportForm::ACKNOWLEDGMENT)
            .expect("submit")
            .expect("valid message is accepted");
        assert_eq!(receipt.acknowledgment, SupportForm::ACKNOWLEDGMENT);

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].1.message, "Please call back");
        assert_eq!(
            controller.snapshot().expect("snapshot").model,
            SupportForm::default()
        );
    }
}
