/// Shared pagination helpers: window shaping, page math, navigation, rendering.
pub mod pagination;
/// Pure parser helpers for typed commands.
pub mod parse;
