pub mod dismiss_install_prompt;
pub mod login;
pub mod logout;
pub mod register_user;
pub mod submit_report;
