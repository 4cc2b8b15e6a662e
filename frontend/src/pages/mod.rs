pub mod add_user;
pub mod forgot_password;
pub mod history;
pub mod home;
pub mod login;
pub mod reset_password;
pub mod set_password;
