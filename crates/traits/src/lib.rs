pub mod executor;
pub mod template;

pub use executor::{Executor, SyncExecutor};
pub use template::{InMemoryTemplateProvider, SharedTemplate, TemplateError, TemplateProvider};
