use std::borrow::Cow;

use crate::form::FormModel as _;
use rust_decimal::Decimal;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn form_facade_types_are_send_and_sync() {
    assert_send_sync::<crate::form::FormController<crate::forms::SupportForm, crate::form::FieldError>>();
    assert_send_sync::<crate::form::LoggingSink>();
    assert_send_sync::<crate::form::FieldError>();
    assert_send_sync::<crate::form::FormOptions>();
}

#[test]
fn prelude_smoke_builds_site_state() {
    use crate::prelude::*;

    let routes = RouteTable::site();
    assert!(!routes.is_empty());

    let tree = NavTree::site();
    let mut menu = tree.mobile_menu();
    menu.set_visible(true);

    let mut faqs = faq_group();
    faqs.toggle(FAQS[0].id);
    assert_eq!(faqs.open_count(), 1);

    let tabs = TabStrip::new()
        .item(TabItem::new("overview", "Overview"))
        .default_tab("overview");
    assert!(tabs.is_active("overview"));

    let controller = JobApplicationForm::controller().expect("controller");
    assert!(matches!(
        controller.snapshot().expect("snapshot").submit_state,
        SubmitState::Idle
    ));
}

#[test]
fn forms_facade_exposes_the_course_catalog() {
    let types = crate::forms::course_types();
    let courses = crate::forms::courses();
    assert!(!types.is_empty());
    assert!(!courses.is_empty());
    assert_eq!(
        crate::forms::course_fee(courses[1].value),
        Some(Decimal::new(50000, 2))
    );
}

#[derive(Clone, crate::form::FormModel)]
struct ApiSmokeForm {
    title: String,
    enabled: bool,
    amount: Decimal,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct ApiSmokeError(&'static str);

impl crate::form::ValidationError for ApiSmokeError {
    fn message(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.0)
    }
}

fn validate_smoke_title(_model: &ApiSmokeForm, value: &String) -> Result<(), ApiSmokeError> {
    if value.trim().is_empty() {
        return Err(ApiSmokeError("title must not be empty"));
    }
    Ok(())
}

#[test]
fn derived_form_model_drives_the_controller() {
    let controller = crate::form::FormController::new(
        ApiSmokeForm {
            title: String::new(),
            enabled: false,
            amount: Decimal::ZERO,
        },
        crate::form::FormOptions::default(),
    );
    let fields = ApiSmokeForm::fields();

    controller
        .register_field_validator(fields.title(), validate_smoke_title)
        .expect("register validator");
    assert!(!controller.validate_form().expect("validate"));

    controller
        .set(fields.title(), "Quarterly report".into())
        .expect("set title");
    controller.set(fields.enabled(), true).expect("set enabled");
    controller
        .set(fields.amount(), Decimal::new(125, 2))
        .expect("set amount");
    assert!(controller.validate_form().expect("validate"));

    assert_eq!(ApiSmokeForm::field_keys().len(), 3);
}
