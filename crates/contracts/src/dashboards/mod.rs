pub mod d600_executive;
pub mod d601_analytics;
