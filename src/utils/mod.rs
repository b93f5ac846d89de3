mod config;
mod format_int;
mod fps_limit;
mod topology;

pub use config::Config;
pub use format_int::with_delimiters;
pub use fps_limit::FrameLimiter;
pub use topology::{wrap_dec, wrap_inc};
