pub use crate::content::{ABOUT_BLURB, CORPORATE_OFFICE, ContactCard, FAQS, FaqEntry, faq_group};
pub use crate::disclosure::{Disclosure, DisclosureGroup, DisclosureMode, MobileMenu};
pub use crate::form::{
    FieldError, FieldKey, FieldLens, FileUpload, FormController, FormError, FormId, FormModel,
    FormOptions, FormResult, FormSnapshot, LoggingSink, SubmissionReceipt, SubmissionSink,
    SubmitState, ValidationError, ValidationMode,
};
pub use crate::forms::{
    CourseOption, EnrollmentForm, JobApplicationForm, SELECT_SENTINEL_LABEL, SupportForm,
    course_fee, course_types, courses, select_labels,
};
pub use crate::nav::{
    NO_TAB_CONTENT, NavLink, NavSection, NavTree, PageId, RouteTable, TabItem, TabStrip,
};
