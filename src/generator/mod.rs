//! Renders an evaluated stylesheet as plain CSS text.

pub mod generator;

#[cfg(test)]
mod tests;
