// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A plain-text table: rows of `data` formatted through `columns`, padded
/// to the widest cell per column and joined by `separator`.
pub struct Table<'a, T, C: Column<T>> {
    pub columns: &'a [C],
    pub separator: &'a str,
    pub data: &'a [T],
}

impl<'a, T, C: Column<T>> fmt::Display for Table<'a, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table: Vec<Vec<String>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let max_widths = get_column_max_width(&table);

        for (cells, row) in table.iter().zip(self.data) {
            for (j, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let last = j == self.columns.len() - 1;
                let cell = stylize_cell(col, row, cell, max_widths[j], last);
                write!(f, "{cell}")?;
                if !last {
                    write!(f, "{}", self.separator)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub trait Column<T> {
    fn format(&self, data: &T) -> String;
    fn padding_direction(&self) -> PaddingDirection;
    fn color(&self, data: &T) -> Option<Color>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

fn stylize_cell<T>(
    col: &impl Column<T>,
    data: &T,
    cell: &str,
    width: usize,
    last: bool,
) -> String {
    // padding by display width, not byte length
    let pad = width.saturating_sub(cell.width());
    let cell = match col.padding_direction() {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{}", " ".repeat(pad)),
        PaddingDirection::Right => format!("{}{cell}", " ".repeat(pad)),
    };

    match col.color(data) {
        Some(color) => cell.color(color).to_string(),
        None => cell,
    }
}

fn get_column_max_width(table: &[Vec<String>]) -> Vec<usize> {
    let Some(first) = table.first() else {
        return Vec::new();
    };

    let mut max_width = vec![0; first.len()];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            let width = cell.width();
            if width > max_width[i] {
                max_width[i] = width;
            }
        }
    }
    max_width
}
