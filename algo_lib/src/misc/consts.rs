pub const MOD: i64 = 1_000_000_007;
pub const INF: i32 = 1 << 30;
pub const LINF: i64 = 1 << 60;

/// Right, left, up, down.
pub const DIRS4: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
