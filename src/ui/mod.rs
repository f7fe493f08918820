mod command;
mod error;
mod terminal;

pub use command::Command;
pub use error::UiError;
pub use terminal::TerminalUi;

pub type UiResult<T> = Result<T, UiError>;
