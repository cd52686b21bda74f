//! Text rendering of a maze with an optional route overlay.

use mazepath_core::{Grid, Terrain};
use mazepath_paths::Path;

/// Characters used for each kind of square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub start: char,
    pub goal: char,
    pub route: char,
    pub open: char,
    pub wall: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            start: 'S',
            goal: 'E',
            route: '*',
            open: '.',
            wall: '#',
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    pub glyphs: Glyphs,
}

impl Renderer {
    /// Walls look like open squares; only the route and endpoints stand out.
    pub fn plain() -> Self {
        let glyphs = Glyphs::default();
        Self {
            glyphs: Glyphs {
                wall: glyphs.open,
                ..glyphs
            },
        }
    }

    /// One line per row, every square followed by a space. The start and goal
    /// markers always win over the route.
    pub fn render(&self, grid: &Grid, path: Option<&Path>) -> String {
        let g = &self.glyphs;
        let mut squares: Vec<char> = grid
            .iter()
            .map(|cell| match cell.terrain {
                Terrain::Blocked => g.wall,
                Terrain::Open | Terrain::Start | Terrain::Goal => g.open,
            })
            .collect();
        if let Some(path) = path {
            for &id in path.cells() {
                if let Some(sq) = squares.get_mut(id) {
                    *sq = g.route;
                }
            }
        }
        squares[grid.start()] = g.start;
        squares[grid.goal()] = g.goal;

        let mut out = String::with_capacity(grid.len() * 2 + grid.rows());
        for row in squares.chunks(grid.cols()) {
            for &sq in row {
                out.push(sq);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_paths::{Graph, dijkstra};

    #[test]
    fn route_and_endpoints() {
        let grid = Grid::parse("S..\n.#.\n..E").unwrap();
        let graph = Graph::from_grid(&grid);
        let path = dijkstra(&graph, 0, 8).unwrap();
        let text = Renderer::default().render(&grid, Some(&path));
        let squares: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(squares.len(), 9);
        assert_eq!(squares[0], 'S');
        assert_eq!(squares[8], 'E');
        assert_eq!(squares[4], '#');
        for &id in &path.cells()[1..path.len() - 1] {
            assert_eq!(squares[id], '*');
        }
        assert_eq!(squares.iter().filter(|&&c| c == '*').count(), path.len() - 2);
    }

    #[test]
    fn row_layout() {
        let grid = Grid::open(2, 3).unwrap();
        let text = Renderer::default().render(&grid, None);
        assert_eq!(text, "S . . \n. . E \n");
    }

    #[test]
    fn plain_hides_walls() {
        let grid = Grid::parse("S#\n#E").unwrap();
        assert_eq!(Renderer::plain().render(&grid, None), "S . \n. E \n");
        assert_eq!(Renderer::default().render(&grid, None), "S # \n# E \n");
    }

    #[test]
    fn single_cell_shows_goal() {
        let grid = Grid::open(1, 1).unwrap();
        assert_eq!(Renderer::default().render(&grid, None), "E \n");
    }

    #[test]
    fn rendered_maze_parses_back() {
        let grid = Grid::parse("S..#\n.#..\n...E").unwrap();
        let text = Renderer::default().render(&grid, None);
        assert_eq!(Grid::parse(&text).unwrap(), grid);
    }
}
