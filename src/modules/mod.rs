pub mod portfolio;
pub mod site;
