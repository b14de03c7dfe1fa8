//! Delta-time-driven canvas simulation: worms crawl the ground line,
//! ghosts bob across the upper canvas at half opacity, spiders drop in
//! on threads and bounce at a random descent limit.

pub mod compute;
pub mod entities;
pub mod render;
