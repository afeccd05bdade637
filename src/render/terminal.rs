//! Terminal renderer backed by crossterm

use super::Renderer;
use crate::config::RenderConfig;
use crate::game_of_life::Grid;
use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, PrintStyledContent, Stylize},
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// Draws each generation as rows of glyphs, one glyph plus a space per cell
pub struct TerminalRenderer<W: Write> {
    out: W,
    config: RenderConfig,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(config: RenderConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: RenderConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        if self.config.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        for row in grid.rows() {
            for cell in row {
                if !cell.is_alive() {
                    queue!(self.out, Print(self.config.dead_glyph), Print(' '))?;
                } else if self.config.color {
                    queue!(
                        self.out,
                        PrintStyledContent(self.config.alive_glyph.green().bold()),
                        Print(' ')
                    )?;
                } else {
                    queue!(self.out, Print(self.config.alive_glyph), Print(' '))?;
                }
            }
            queue!(self.out, Print('\n'))?;
        }
        queue!(self.out, Print('\n'))?;

        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: usize) -> Result<()> {
        self.draw(grid)
            .with_context(|| format!("Failed to render generation {}", generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::parse_grid_from_string;

    fn plain_config() -> RenderConfig {
        RenderConfig {
            alive_glyph: '*',
            dead_glyph: '-',
            color: false,
            clear_screen: false,
        }
    }

    #[test]
    fn test_plain_frame() {
        let grid = parse_grid_from_string("000\n010\n000\n").unwrap();
        let mut renderer = TerminalRenderer::new(Vec::new(), plain_config());
        renderer.render(&grid, 0).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(output, "- - - \n- * - \n- - - \n\n");
    }

    #[test]
    fn test_clear_and_color_emit_escape_codes() {
        let grid = parse_grid_from_string("000\n010\n000\n").unwrap();
        let config = RenderConfig {
            color: true,
            clear_screen: true,
            ..plain_config()
        };
        let mut renderer = TerminalRenderer::new(Vec::new(), config);
        renderer.render(&grid, 3).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(output.starts_with("\x1b[2J"));
        assert!(output.contains("\x1b[1;1H"));
        assert!(output.contains('*'));
        assert!(output.contains("\x1b[1m"));
    }

    #[test]
    fn test_render_does_not_touch_grid() {
        let grid = parse_grid_from_string("0000\n0110\n0110\n0000\n").unwrap();
        let before = grid.clone();
        let mut renderer = TerminalRenderer::new(Vec::new(), plain_config());
        renderer.render(&grid, 0).unwrap();
        renderer.render(&grid, 1).unwrap();
        assert_eq!(grid, before);
    }
}
