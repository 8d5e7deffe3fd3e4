pub mod card;
pub mod cli;
pub mod config;
pub mod rng;
pub mod session;
pub mod simulation;
