pub mod content;
pub mod disclosure;
pub mod form;
pub mod forms;
pub mod nav;
pub mod prelude;

pub use form::{FieldError, FormController, FormModel};
pub use nav::{PageId, RouteTable};

#[cfg(test)]
mod test_public_api;
