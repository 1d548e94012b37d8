// src/fetch/mod.rs
//
// Record sources. `sheet` pulls the published spreadsheet CSV (the live
// table), `blizzard` polls the game API to produce static JSON dumps.
// Both stop at raw data; normalization happens in `normalize`.

pub mod blizzard;
pub mod sheet;
