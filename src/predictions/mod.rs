pub mod controller;
pub mod errors;
pub mod service;
pub mod structs;
