//! Default value functions for serde deserialization.

pub fn enabled() -> bool {
    true
}

pub fn max_expansions() -> usize {
    10_000_000
}

pub fn grid_size_xy() -> usize {
    100
}

pub fn grid_size_z() -> usize {
    150
}

pub fn cell_size() -> [f32; 3] {
    [5.0, 5.0, 1.0]
}

pub fn safety_margin() -> u32 {
    5
}
