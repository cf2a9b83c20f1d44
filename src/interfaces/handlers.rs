pub mod contact_me;
pub mod home;
pub mod projects;
pub mod system;
