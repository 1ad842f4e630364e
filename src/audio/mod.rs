pub mod error;
#[cfg(test)]
pub(crate) mod fake;
pub mod playback;
pub mod probe;
pub mod progress;
pub mod state;
pub mod system;
pub mod traits;

#[cfg(test)]
mod tests;
