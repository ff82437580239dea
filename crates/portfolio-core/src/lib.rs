pub mod config;
pub mod constants;
pub mod contact;
pub mod delivery;
pub mod motion;
pub mod particles;
pub mod progress;
pub mod sections;
pub mod theme;

pub use config::*;
pub use constants::*;
pub use contact::*;
pub use delivery::*;
pub use motion::*;
pub use particles::*;
pub use progress::*;
pub use sections::*;
pub use theme::*;
