//! Text rendering of graphs (`Display` implementations).

pub mod text;
