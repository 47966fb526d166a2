/// API route modules
pub mod contact;
pub mod health;
pub mod portfolio;
pub mod projects;
