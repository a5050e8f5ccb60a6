pub const DEFAULT_TOP_N: usize = 10;
