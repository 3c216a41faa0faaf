/// The version of the physical row layout interpreted by this crate.
///
/// A dot tag stores one recovery word per row. Each row has twelve dot
/// positions, and each position carries a fixed weight, printed on the tag
/// itself, descending from left to right:
///
/// ```text
/// ┌──────┬──────┬─────┬─────┬─────┬────┬────┬────┬───┬───┬───┬───┐
/// │ 2048 │ 1024 │ 512 │ 256 │ 128 │ 64 │ 32 │ 16 │ 8 │ 4 │ 2 │ 1 │
/// └──────┴──────┴─────┴─────┴─────┴────┴────┴────┴───┴───┴───┴───┘
///    c0     c1     c2    c3    c4   c5   c6   c7   c8  c9 c10 c11
/// ```
///
/// The weights of the punched positions sum to the word's one-based number
/// within the word list (`1` through `2048`). A row with no punched dots
/// holds no word yet, which keeps "nothing recorded" distinguishable from
/// every recorded word. Sums above `2048` do not refer to any word and mark
/// the row as unreadable.
///
/// This layout is version 1. Tags stamped with a different layout version
/// are not interpretable by this crate.
pub const LAYOUT_VERSION: u8 = 1;

/// The number of dot positions in a single row
pub const GRID_DOTS: usize = 12;

/// The largest weighted sum a row can express (every dot punched)
pub const MAX_ROW_VALUE: u16 = (1 << GRID_DOTS) - 1;

/// The weight of the dot at the given column. Columns are numbered from the
/// left, so column `0` carries the largest weight; [`LAYOUT_VERSION`]
/// documents the full arrangement.
///
/// Panics if `column` is not within `0..GRID_DOTS`.
pub const fn column_weight(column: usize) -> u16 {
    assert!(column < GRID_DOTS);

    1 << (GRID_DOTS - 1 - column)
}
