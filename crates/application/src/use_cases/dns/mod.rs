pub mod handle_answer;

pub use handle_answer::HandleAnswerUseCase;
