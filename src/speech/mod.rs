//! Allophone playback

pub mod allophones;
pub mod device;
pub mod speaker;

pub use device::{create_device, AllophoneDevice, DryRunDevice};
pub use speaker::Speaker;
