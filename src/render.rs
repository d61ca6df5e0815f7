use crate::types::{Orientation, Stacking};

const MAX_WIDTH: f64 = 80.0;
const MAX_HEIGHT: f64 = 40.0;

/// Side view of a stack: each box is drawn as wide as the long side of its
/// footprint and as tall as its height, the top box centered on the bottom one.
pub fn render_stack(stacking: &Stacking) -> String {
    let bottom = &stacking.bottom;
    let top = &stacking.top;

    let span = bottom.footprint.max().max(top.footprint.max());
    if span == 0 || stacking.height == 0 {
        return String::new();
    }

    let scale = f64::min(
        MAX_WIDTH / span as f64,
        MAX_HEIGHT / stacking.height as f64,
    );
    let bottom_w = scaled(bottom.footprint.max(), scale);
    let bottom_h = scaled(bottom.height, scale);
    let top_w = scaled(top.footprint.max(), scale);
    let top_h = scaled(top.height, scale);

    let grid_w = bottom_w.max(top_w);
    let grid_h = top_h + bottom_h;
    let mut grid = vec![vec![' '; grid_w + 1]; grid_h + 1];

    let top_x = (grid_w - top_w) / 2;
    let bottom_x = (grid_w - bottom_w) / 2;
    draw_box(&mut grid, top_x, 0, top_w, top_h, top);
    draw_box(&mut grid, bottom_x, top_h, bottom_w, bottom_h, bottom);

    let mut result = String::new();
    for row in &grid {
        let line: String = row.iter().collect();
        result.push_str(line.trim_end());
        result.push('\n');
    }
    result
}

fn scaled(v: u32, scale: f64) -> usize {
    ((v as f64 * scale).round() as usize).max(1)
}

fn draw_box(grid: &mut [Vec<char>], x: usize, y: usize, w: usize, h: usize, o: &Orientation) {
    draw_rect(grid, x, y, w, h);

    let label: Vec<char> = format!("{}x{}", o.footprint.max(), o.height)
        .chars()
        .collect();
    if w > label.len() && h > 1 {
        let cy = y + h / 2;
        let start_x = x + (w - label.len()) / 2 + 1;
        for (i, &ch) in label.iter().enumerate() {
            let cx = start_x + i;
            if cx > x && cx < x + w {
                grid[cy][cx] = ch;
            }
        }
    }
}

#[allow(clippy::needless_range_loop)]
fn draw_rect(grid: &mut [Vec<char>], x: usize, y: usize, w: usize, h: usize) {
    let rows = grid.len();
    let cols = if rows > 0 { grid[0].len() } else { return };

    for i in x..=x + w {
        if i < cols {
            for j in [y, y + h] {
                if j < rows {
                    grid[j][i] = if grid[j][i] == '|' || grid[j][i] == '+' {
                        '+'
                    } else {
                        '-'
                    };
                }
            }
        }
    }

    for j in y..=y + h {
        if j < rows {
            for i in [x, x + w] {
                if i < cols {
                    grid[j][i] = if grid[j][i] == '-' || grid[j][i] == '+' {
                        '+'
                    } else {
                        '|'
                    };
                }
            }
        }
    }

    for &cx in &[x, x + w] {
        for &cy in &[y, y + h] {
            if cy < rows && cx < cols {
                grid[cy][cx] = '+';
            }
        }
    }
}
