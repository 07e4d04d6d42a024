pub mod logbook;
pub mod parser;
pub mod store;
