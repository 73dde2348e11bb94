pub mod portfolio;
pub mod contact;
