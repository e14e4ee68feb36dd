pub mod blink;
pub mod config;
pub mod constants;
pub mod expression;
pub mod particles;
pub mod proximity;
pub mod scene;
pub mod scheduler;
pub mod smile;
pub mod surface;

pub use blink::*;
pub use config::*;
pub use expression::*;
pub use particles::*;
pub use proximity::*;
pub use scene::*;
pub use scheduler::*;
pub use smile::*;
pub use surface::*;
