pub mod dot;
pub mod line;
pub mod ring;

pub use dot::DotCmd;
pub use line::LineCmd;
pub use ring::RingCmd;
