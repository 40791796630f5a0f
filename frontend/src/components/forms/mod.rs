pub mod submit_assignment_form;

pub use submit_assignment_form::SubmitAssignmentForm;
