pub mod search;

use crate::error::Result;

pub use search::SearchCommand;

pub trait Command {
    fn execute(&self) -> Result<()>;
}
