use genexui::form::{FieldLens, FormModel};

#[derive(Clone, genexui::form::FormModel)]
struct DemoForm {
    email: String,
}

fn main() {
    let fields = DemoForm::fields();
    let lens = fields.email();
    let mut model = DemoForm {
        email: "a@genexcorp.com".to_string(),
    };
    lens.set(&mut model, "b@genexcorp.com".to_string());
    assert_eq!(lens.key().as_str(), "email");
    assert_eq!(lens.get(&model), "b@genexcorp.com");
    assert_eq!(DemoForm::field_keys().len(), 1);
}
