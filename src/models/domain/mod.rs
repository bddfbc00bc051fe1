pub mod question;

pub use question::{Answer, Question};
