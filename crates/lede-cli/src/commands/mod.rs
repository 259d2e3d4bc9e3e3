pub mod history;
pub mod read;
