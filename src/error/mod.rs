mod app;
mod output;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use output::OutputError;
pub use validation::{PoolKind, ValidationError};
