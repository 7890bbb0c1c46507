pub mod page_state;
