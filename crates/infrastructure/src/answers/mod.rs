pub mod exact_container;
pub mod pattern_container;
pub mod safe_box;

pub use exact_container::ExactAnswerContainer;
pub use pattern_container::PatternContainer;
pub use safe_box::SafeBoxProvider;
