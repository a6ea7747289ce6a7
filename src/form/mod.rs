mod controller;
pub mod rules;
mod submit;
mod validation;


pub use genexui_form_derive::FormModel;

pub use controller::{
    FieldKey, FieldMeta, FormController, FormError, FormId, FormOptions, FormResult, FormSnapshot,
    SubmitState, ValidationMode,
};
pub use rules::{DOCUMENT_MIME_TYPES, FieldError, FileUpload};
pub use submit::{LoggingSink, RecordingSink, SubmissionReceipt, SubmissionSink};
pub use validation::{FieldLens, FieldValidator, FormModel, FormValidator, ValidationError};
