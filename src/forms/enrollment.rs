use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::form::{FieldError, FormController, FormModel, FormOptions, FormResult, rules};

/// Label rendered for the `""` sentinel option of enumerated selects.
pub const SELECT_SENTINEL_LABEL: &str = "--- Select ---";

/// One entry of an enrollment select catalog.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CourseOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Per-person fee in USD; class-type options carry none.
    pub fee_per_person: Option<Decimal>,
}

static COURSE_TYPES: LazyLock<Vec<CourseOption>> = LazyLock::new(|| {
    vec![
        CourseOption {
            value: "Corporate Training",
            label: "Corporate Training",
            fee_per_person: None,
        },
        CourseOption {
            value: "Career Augmentation Training",
            label: "Career Augmentation Training",
            fee_per_person: None,
        },
    ]
});

static COURSES: LazyLock<Vec<CourseOption>> = LazyLock::new(|| {
    vec![
        CourseOption {
            value: "Change in Technology - $450 per person",
            label: "Change in Technology - $450 per person",
            fee_per_person: Some(Decimal::new(45000, 2)),
        },
        CourseOption {
            value: "Fresher - $500 per person",
            label: "Fresher - $500 per person",
            fee_per_person: Some(Decimal::new(50000, 2)),
        },
    ]
});

pub fn course_types() -> &'static [CourseOption] {
    &COURSE_TYPES
}

pub fn courses() -> &'static [CourseOption] {
    &COURSES
}

/// Per-person fee of a catalog course, by select value.
pub fn course_fee(value: &str) -> Option<Decimal> {
    COURSES
        .iter()
        .find(|course| course.value == value)
        .and_then(|course| course.fee_per_person)
}

/// The labels a select renders for a catalog: the sentinel first, then the
/// options in catalog order.
pub fn select_labels(catalog: &[CourseOption]) -> Vec<&str> {
    std::iter::once(SELECT_SENTINEL_LABEL)
        .chain(catalog.iter().map(|option| option.label))
        .collect()
}

/// The course enrollment form reached from `/trainings`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, FormModel)]
pub struct EnrollmentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_type: String,
    pub course: String,
    pub message: String,
}

impl EnrollmentForm {
    pub const ACKNOWLEDGMENT: &'static str = "Thank you for booking! We'll contact you soon.";

    pub fn controller() -> FormResult<FormController<EnrollmentForm, FieldError>> {
        let controller = FormController::new(EnrollmentForm::default(), FormOptions::default());
        let fields = EnrollmentForm::fields();

        controller.register_field_validator(
            fields.name(),
            |_model: &EnrollmentForm, value: &String| {
                rules::required(value, "This field is required.")
            },
        )?;
        controller.register_field_validator(
            fields.email(),
            |_model: &EnrollmentForm, value: &String| {
                rules::required(value, "Please enter your email.")?;
                rules::email(value, "Enter a valid email address.")
            },
        )?;
        controller.register_field_validator(
            fields.phone(),
            |_model: &EnrollmentForm, value: &String| {
                rules::required(value, "Please enter your mobile number.")?;
                rules::phone(value, "Enter a valid 10-digit phone number.")
            },
        )?;
        controller.register_field_validator(
            fields.course_type(),
            |_model: &EnrollmentForm, value: &String| {
                rules::selected(value, "Please select your class.")
            },
        )?;
        controller.register_field_validator(
            fields.course(),
            |_model: &EnrollmentForm, value: &String| {
                rules::selected(value, "Please select your course.")
            },
        )?;

        controller.register_required_field(fields.name())?;
        controller.register_required_field(fields.email())?;
        controller.register_required_field(fields.phone())?;
        controller.register_required_field(fields.course_type())?;
        controller.register_required_field(fields.course())?;

        Ok(controller)
    }
}
