pub mod contact_me;
pub mod project;
pub mod system;
