pub mod controls;
pub mod gauge;
pub mod progress;
pub mod sidebar;
pub mod skeleton;
pub mod spinner;
