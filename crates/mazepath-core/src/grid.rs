//! The [`Grid`] type: a rows x cols maze of [`Cell`]s.
//!
//! A grid is immutable once built. Cell ids are row-major
//! (`id = row * cols + col`); the start sits at id 0 and the goal at the last
//! id.

use crate::error::GridError;
use crate::geom::Point;
use crate::terrain::Terrain;

/// Row-major index of a cell.
pub type CellId = usize;

/// Largest row or column count; positions are stored as `i32`.
pub const MAX_SIDE: usize = i32::MAX as usize;

/// One maze square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id: CellId,
    pub pos: Point,
    pub terrain: Terrain,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular maze with exactly one start and one goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid, asking `terrain_at` for every cell except the two
    /// endpoints, which are always [`Terrain::Start`] and [`Terrain::Goal`].
    pub fn from_terrain(
        rows: usize,
        cols: usize,
        mut terrain_at: impl FnMut(Point) -> Terrain,
    ) -> Result<Self, GridError> {
        let len = cell_count(rows, cols)?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                let id = row * cols + col;
                let pos = Point::at(row as i32, col as i32);
                let terrain = if id == 0 {
                    Terrain::Start
                } else if id == len - 1 {
                    Terrain::Goal
                } else {
                    match terrain_at(pos) {
                        // Endpoints are only ever placed at the corners.
                        Terrain::Start | Terrain::Goal => Terrain::Open,
                        t => t,
                    }
                };
                cells.push(Cell { id, pos, terrain });
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// A grid with every non-endpoint cell open.
    pub fn open(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::from_terrain(rows, cols, |_| Terrain::Open)
    }

    /// Parse a text layout: one line per row, `.` open, `#` blocked, `S` and
    /// `E` for the endpoints. Whitespace inside a line is ignored, so the
    /// renderer's space-separated output parses back. Blank lines are
    /// skipped.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<Terrain>> = Vec::new();
        for (row, line) in s.lines().enumerate() {
            let mut tiles = Vec::new();
            for (col, ch) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let t = Terrain::from_glyph(ch).ok_or(GridError::InvalidChar {
                    ch,
                    pos: Point::at(row as i32, col as i32),
                })?;
                tiles.push(t);
            }
            if tiles.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                if first.len() != tiles.len() {
                    return Err(GridError::InconsistentWidth {
                        expected: first.len(),
                        found: tiles.len(),
                        row: rows.len(),
                    });
                }
            }
            rows.push(tiles);
        }

        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty {
                rows: height,
                cols: width,
            });
        }
        let last = height * width - 1;
        for (r, tiles) in rows.iter().enumerate() {
            for (c, &t) in tiles.iter().enumerate() {
                check_placement(t, r * width + c, last, Point::at(r as i32, c as i32))?;
            }
        }

        Self::from_terrain(height, width, |p| rows[p.y as usize][p.x as usize])
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Id of the start cell.
    #[inline]
    pub fn start(&self) -> CellId {
        0
    }

    /// Id of the goal cell.
    #[inline]
    pub fn goal(&self) -> CellId {
        self.cells.len() - 1
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.cols && (p.y as usize) < self.rows
    }

    /// Id of the cell at `p`, or `None` if outside.
    #[inline]
    pub fn id_of(&self, p: Point) -> Option<CellId> {
        self.contains(p).then(|| p.y as usize * self.cols + p.x as usize)
    }

    /// Position of cell `id`. The id does not have to be in range; this is
    /// plain row-major arithmetic.
    #[inline]
    pub fn point_of(&self, id: CellId) -> Point {
        Point::at((id / self.cols) as i32, (id % self.cols) as i32)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Cell at `p`, or `None` if outside.
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.id_of(p).and_then(|id| self.cells.get(id))
    }

    /// Terrain at `p`; out-of-bounds counts as blocked.
    pub fn terrain(&self, p: Point) -> Terrain {
        self.at(p).map_or(Terrain::Blocked, |c| c.terrain)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells with the given terrain.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|c| c.terrain == terrain).count()
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty { rows, cols });
    }
    if rows > MAX_SIDE || cols > MAX_SIDE {
        return Err(GridError::TooLarge { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridError::TooLarge { rows, cols })
}

/// Endpoints only at their corners, and never a wall on a corner.
fn check_placement(
    terrain: Terrain,
    id: CellId,
    last: CellId,
    pos: Point,
) -> Result<(), GridError> {
    let misplaced = match terrain {
        Terrain::Start => id != 0,
        Terrain::Goal => id != last,
        Terrain::Blocked => id == 0 || id == last,
        Terrain::Open => false,
    };
    if misplaced {
        return Err(GridError::MisplacedTerrain { terrain, pos });
    }
    Ok(())
}

/// Unchecked wire form of a [`Grid`]. Ids and positions are recomputed from
/// the cell order, so only the terrain is taken from the input.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        let RawGrid { rows, cols, cells } = raw;
        let expected = cell_count(rows, cols)?;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                rows,
                cols,
                expected,
                found: cells.len(),
            });
        }
        for (id, cell) in cells.iter().enumerate() {
            let pos = Point::at((id / cols) as i32, (id % cols) as i32);
            check_placement(cell.terrain, id, expected - 1, pos)?;
        }
        Self::from_terrain(rows, cols, |p| cells[p.y as usize * cols + p.x as usize].terrain)
    }
}
