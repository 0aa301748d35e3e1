use wasm_bindgen::prelude::*;
use orrery_engine::*;

pub mod bodies;
pub mod config;
pub mod game;
pub mod rig;
pub mod select;

use game::Orrery;

orrery_web::export_game!(Orrery, "solar-system");
