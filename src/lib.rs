//! Domain and persistence modules for the stacks library booking system.

pub mod database;
pub mod domain;
pub mod migrator;

#[cfg(test)]
mod test;

mod ids;
