//! Static collision surface.
//!
//! The world is a tile grid; a position is valid iff a walkable/road tile
//! exists under it. This is the only collision truth the client consults —
//! the server resolves the authoritative version independently.

use std::collections::HashSet;

use anyhow::Context;
use serde::Deserialize;

use crate::math::Vec2;

/// Walkable-tile lookup over world coordinates.
#[derive(Debug, Clone)]
pub struct TileSurface {
    tile_size: f32,
    walkable: HashSet<(i32, i32)>,
}

#[derive(Deserialize)]
struct SurfaceFile {
    tile_size: f32,
    /// Row strings, `.` walkable, anything else blocked. Row 0 is y = 0.
    rows: Vec<String>,
}

impl TileSurface {
    pub fn new(tile_size: f32) -> Self {
        Self {
            tile_size,
            walkable: HashSet::new(),
        }
    }

    /// Builds a surface from ASCII rows: `.` marks a walkable tile.
    pub fn from_rows(tile_size: f32, rows: &[&str]) -> Self {
        let mut surface = Self::new(tile_size);
        for (ty, row) in rows.iter().enumerate() {
            for (tx, ch) in row.chars().enumerate() {
                if ch == '.' {
                    surface.walkable.insert((tx as i32, ty as i32));
                }
            }
        }
        surface
    }

    /// Parses a surface from the map JSON shape.
    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        let file: SurfaceFile = serde_json::from_str(s).context("parse surface json")?;
        let rows: Vec<&str> = file.rows.iter().map(String::as_str).collect();
        Ok(Self::from_rows(file.tile_size, &rows))
    }

    pub fn set_walkable(&mut self, tx: i32, ty: i32) {
        self.walkable.insert((tx, ty));
    }

    /// True iff a tile exists under the world coordinate.
    pub fn is_walkable(&self, x: f32, y: f32) -> bool {
        let tx = (x / self.tile_size).floor() as i32;
        let ty = (y / self.tile_size).floor() as i32;
        self.walkable.contains(&(tx, ty))
    }

    pub fn is_walkable_at(&self, position: Vec2) -> bool {
        self.is_walkable(position.x, position.y)
    }
}
