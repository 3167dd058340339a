mod category;
mod question;

pub use category::Category;
pub use question::{NewQuestion, Question};
