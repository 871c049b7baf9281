//! API request handlers.

mod dashboard;
mod export;
mod measures;
mod sales;
mod upload;

pub use dashboard::*;
pub use export::*;
pub use measures::*;
pub use sales::*;
pub use upload::*;
