pub mod layout;
mod buffer;
#[cfg(target_os = "windows")]
mod process;
mod reader;

#[cfg(test)]
pub mod mock;

pub use buffer::{ByteBuffer, Width};
#[cfg(target_os = "windows")]
pub use process::ProcessHandle;
pub use reader::ReadMemory;

/// Default executable name of the game
pub const DEFAULT_PROCESS_NAME: &str = "D2R.exe";

#[cfg(test)]
pub use mock::{MockMemory, MockMemoryBuilder};
