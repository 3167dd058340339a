pub mod category;
pub mod common;
pub mod deserializers;
pub mod question;
pub mod quiz;
