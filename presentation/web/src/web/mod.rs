pub mod form;
pub mod listing;
pub mod routes;
pub mod views;
