pub mod contact_form;
pub mod notifications;
pub mod section;
pub mod selection;
pub mod title_rotator;
pub mod visibility;
