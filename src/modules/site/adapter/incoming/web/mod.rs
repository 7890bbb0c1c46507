pub mod routes;
pub mod shell;
pub mod views;
