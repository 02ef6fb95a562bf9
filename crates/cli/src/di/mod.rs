mod answers;

pub use answers::AnswerServices;
