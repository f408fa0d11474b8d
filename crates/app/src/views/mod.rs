pub mod admin;
pub mod events;
pub mod login;
pub mod register;

pub use admin::AdminRoster;
pub use events::EventCatalog;
pub use login::LoginPage;
pub use register::RegistrationDialog;
