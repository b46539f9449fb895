pub mod algos;
pub mod app;
pub mod hash;
pub mod input;
pub mod setup;
pub mod verify;
