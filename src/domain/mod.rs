pub mod confirmation;
pub mod error;
pub mod money;
pub mod processor;
