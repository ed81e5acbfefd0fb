pub mod encode;
pub mod output;
