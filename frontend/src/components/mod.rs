pub mod common;
pub mod guard;
pub mod history_dialog;
pub mod layout;
