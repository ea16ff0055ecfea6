pub mod console;
pub mod exam;
pub mod fleet;
pub mod logging;
pub mod output;
