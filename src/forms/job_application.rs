use serde::Serialize;

use crate::form::{
    FieldError, FileUpload, FormController, FormModel, FormOptions, FormResult, rules,
};

/// Minimum trimmed length of the position title.
pub const POSITION_MIN_LEN: usize = 8;

/// The job application form on `/jobs`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, FormModel)]
pub struct JobApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub linkedin: String,
    pub cover_letter: String,
    pub resume: Option<FileUpload>,
}

impl JobApplicationForm {
    pub const ACKNOWLEDGMENT: &'static str = "Application submitted successfully!";

    /// A controller over an empty application with the page's validation
    /// rules wired in.
    pub fn controller() -> FormResult<FormController<JobApplicationForm, FieldError>> {
        let controller = FormController::new(JobApplicationForm::default(), FormOptions::default());
        let fields = JobApplicationForm::fields();

        controller.register_field_validator(
            fields.name(),
            |_model: &JobApplicationForm, value: &String| {
                rules::required(value, "Name is required")?;
                rules::letters_and_spaces(value, "Name can only contain letters and spaces")
            },
        )?;
        controller.register_field_validator(
            fields.email(),
            |_model: &JobApplicationForm, value: &String| {
                rules::required(value, "Email is required")?;
                rules::email(value, "Email is invalid")
            },
        )?;
        controller.register_field_validator(
            fields.phone(),
            |_model: &JobApplicationForm, value: &String| {
                rules::required(value, "Phone number is required")?;
                rules::phone(value, "Phone must be a 10-digit number")
            },
        )?;
        controller.register_field_validator(
            fields.position(),
            |_model: &JobApplicationForm, value: &String| {
                rules::required(value, "Position is required")?;
                rules::min_trimmed_len(
                    value,
                    POSITION_MIN_LEN,
                    "Position must be at least 8 characters",
                )
            },
        )?;
        controller.register_field_validator(
            fields.linkedin(),
            |_model: &JobApplicationForm, value: &String| {
                rules::linkedin_url(value, "LinkedIn profile must be a valid LinkedIn URL")
            },
        )?;
        controller.register_field_validator(
            fields.resume(),
            |_model: &JobApplicationForm, value: &Option<FileUpload>| {
                rules::document_upload(
                    value.as_ref(),
                    "Resume is required",
                    "Only PDF, DOC, or DOCX files are allowed",
                )
            },
        )?;

        controller.register_required_field(fields.name())?;
        controller.register_required_field(fields.email())?;
        controller.register_required_field(fields.phone())?;
        controller.register_required_field(fields.position())?;
        controller.register_required_field(fields.resume())?;
        controller
            .register_placeholder(fields.linkedin(), "https://www.linkedin.com/in/yourprofile")?;

        Ok(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldLens, RecordingSink, ValidationError};

    fn valid_application() -> JobApplicationForm {
        JobApplicationForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "9876543210".into(),
            position: "Platform Engineer".into(),
            linkedin: String::new(),
            cover_letter: String::new(),
            resume: Some(FileUpload::new("resume.pdf", "application/pdf")),
        }
    }

    fn fill(
        controller: &FormController<JobApplicationForm, FieldError>,
        model: JobApplicationForm,
    ) {
        let fields = JobApplicationForm::fields();
        controller.set(fields.name(), model.name).expect("set name");
        controller.set(fields.email(), model.email).expect("set email");
        controller.set(fields.phone(), model.phone).expect("set phone");
        controller
            .set(fields.position(), model.position)
            .expect("set position");
        controller
            .set(fields.linkedin(), model.linkedin)
            .expect("set linkedin");
        controller
            .set(fields.cover_letter(), model.cover_letter)
            .expect("set cover letter");
        controller
            .set(fields.resume(), model.resume)
            .expect("set resume");
    }

    #[test]
    fn empty_application_reports_every_required_field() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        assert!(!controller.validate_form().expect("validate"));

        let errors = controller.error_state().expect("error state");
        for key in [
            fields.name().key(),
            fields.email().key(),
            fields.phone().key(),
            fields.position().key(),
            fields.resume().key(),
        ] {
            assert!(errors.contains_key(&key), "missing error for {key}");
        }
        assert!(!errors.contains_key(&fields.linkedin().key()));
        assert!(!errors.contains_key(&fields.cover_letter().key()));
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        fill(&controller, valid_application());

        for (value, ok) in [
            ("9876543210", true),
            ("987654321", false),
            ("98765432100", false),
        ] {
            controller.set(fields.phone(), value.into()).expect("set phone");
            controller.validate_form().expect("validate");
            let errors = controller.error_state().expect("error state");
            assert_eq!(!errors.contains_key(&fields.phone().key()), ok, "{value}");
        }
    }

    #[test]
    fn email_uses_the_loose_pattern() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        fill(&controller, valid_application());

        controller.set(fields.email(), "a@b.com".into()).expect("set email");
        assert!(controller.validate_form().expect("validate"));

        controller.set(fields.email(), "a@b".into()).expect("set email");
        controller.validate_form().expect("validate");
        let errors = controller.error_state().expect("error state");
        assert_eq!(
            errors.get(&fields.email().key()).map(|e| e.message()),
            Some("Email is invalid".into())
        );
    }

    #[test]
    fn position_length_boundary_is_eight() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        fill(&controller, valid_application());

        controller
            .set(fields.position(), "Analyst".into())
            .expect("set position");
        controller.validate_form().expect("validate");
        assert!(
            controller
                .error_state()
                .expect("error state")
                .contains_key(&fields.position().key())
        );

        controller
            .set(fields.position(), "Analysts".into())
            .expect("set position");
        assert!(controller.validate_form().expect("validate"));
    }

    #[test]
    fn resume_mime_type_allow_list() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        fill(&controller, valid_application());

        controller
            .set(
                fields.resume(),
                Some(FileUpload::new("resume.png", "image/png")),
            )
            .expect("set resume");
        controller.validate_form().expect("validate");
        assert_eq!(
            controller
                .error_state()
                .expect("error state")
                .get(&fields.resume().key())
                .map(|e| e.message()),
            Some("Only PDF, DOC, or DOCX files are allowed".into())
        );

        for mime in crate::form::DOCUMENT_MIME_TYPES {
            controller
                .set(fields.resume(), Some(FileUpload::new("resume", mime)))
                .expect("set resume");
            assert!(controller.validate_form().expect("validate"), "{mime}");
        }
    }

    #[test]
    fn linkedin_is_optional_but_domain_restricted() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        fill(&controller, valid_application());
        assert!(controller.validate_form().expect("validate"));

        controller
            .set(fields.linkedin(), "https://example.com/jane".into())
            .expect("set linkedin");
        controller.validate_form().expect("validate");
        assert!(
            controller
                .error_state()
                .expect("error state")
                .contains_key(&fields.linkedin().key())
        );

        controller
            .set(fields.linkedin(), "https://www.linkedin.com/in/jane".into())
            .expect("set linkedin");
        assert!(controller.validate_form().expect("validate"));
    }

    #[test]
    fn successful_submit_delivers_payload_and_resets() {
        let controller = JobApplicationForm::controller().expect("controller");
        let sink = RecordingSink::new();
        fill(&controller, valid_application());

        let receipt = controller
            .submit_to(&sink, JobApplicationForm::ACKNOWLEDGMENT)
            .expect("submit")
            .expect("valid application is accepted");
        assert_eq!(receipt.acknowledgment, JobApplicationForm::ACKNOWLEDGMENT);

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].1, valid_application());

        let snapshot = controller.snapshot().expect("snapshot");
        assert_eq!(snapshot.model, JobApplicationForm::default());
        assert!(controller.error_state().expect("error state").is_empty());
    }

    #[test]
    fn validator_is_idempotent_for_unchanged_state() {
        let controller = JobApplicationForm::controller().expect("controller");
        let fields = JobApplicationForm::fields();
        controller
            .set(fields.email(), "a@b".into())
            .expect("set email");

        controller.validate_form().expect("first pass");
        let first = controller.error_state().expect("first error state");
        controller.validate_form().expect("second pass");
        let second = controller.error_state().expect("second error state");
        assert_eq!(first, second);
    }
}
