#![allow(clippy::new_without_default)]

#[macro_use]
extern crate log;

pub mod address;
pub mod api;
pub mod controller;
pub mod geocoder;
pub mod location;
mod logs;
pub mod map;
