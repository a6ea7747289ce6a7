//! The three form instances the site ships: job application, course
//! enrollment, and support contact. Equal-weight copies of the same
//! controller-plus-rules pattern over different field sets.

mod enrollment;
mod job_application;
mod support;

pub use enrollment::{
    CourseOption, EnrollmentForm, SELECT_SENTINEL_LABEL, course_fee, course_types, courses,
    select_labels,
};
pub use job_application::{JobApplicationForm, POSITION_MIN_LEN};
pub use support::SupportForm;
