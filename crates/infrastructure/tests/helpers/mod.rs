#![allow(unused_imports)]

mod builders;

pub use builders::{build_query, build_query_with_class, ChainBuilder};
