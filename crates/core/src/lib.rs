pub mod curriculum;
pub mod persona;
pub mod random;
pub mod rewards;
pub mod selector;
pub mod subject;
pub mod timer;
pub mod transcript;

pub use selector::{ResponseSelector, SelectorConfig, StudentResponse};
pub use subject::Subject;
