/// Player-list transcript command.
pub mod players;
/// Save-record marker scan command.
pub mod scan;
/// Stat-block transcript command.
pub mod stats;
/// Day/time transcript command.
pub mod time;
/// Shared CLI helpers.
pub mod util;
/// Whole-world assembly command.
pub mod world;
