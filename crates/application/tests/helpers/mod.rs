#![allow(unused_imports)]

mod mock_providers;

pub use mock_providers::{FailingMessage, FailingProvider, MockAnswerProvider};
