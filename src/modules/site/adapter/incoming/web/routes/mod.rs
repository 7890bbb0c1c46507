mod index;
mod submit_contact;

pub use index::{index_handler, render_page, IndexQuery};
pub use submit_contact::{submit_contact_handler, ContactSubmission};
