mod contact;
mod health_check;
mod projects;
mod skills;

pub use contact::*;
pub use health_check::*;
pub use projects::*;
pub use skills::*;
