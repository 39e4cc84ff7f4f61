/// Number of tile rows in the arena
pub const ROWS: usize = 28;

/// Number of tile columns in the arena
pub const COLUMNS: usize = 52;

/// Real-time seconds between simulation steps
pub const STEP_INTERVAL: f32 = 0.1;

/// Player body length at round start
pub const INITIAL_PLAYER_LENGTH: usize = 3;

/// Row of the player's fixed spawn cell
pub const SPAWN_ROW: i16 = 13;

/// Column of the player's fixed spawn cell
pub const SPAWN_COLUMN: i16 = 24;

/// Per-cell stride seeding each tile's idle-animation timer, so
/// neighboring tiles never pulse in sync
pub const TILE_PHASE_STRIDE: f32 = 18.0;
