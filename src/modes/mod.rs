pub mod clock;
pub mod human;

pub use clock::Clock;
pub use human::HumanMode;
