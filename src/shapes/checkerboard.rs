use crate::animation::animatable::{Animatable, AnimatablePair};
use crate::foundation::core::Rect;
use crate::path::Path;
use crate::shapes::Shape;

/// Grid of alternating filled cells; the top-left cell is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckerBoard {
    /// Cell rows.
    pub rows: u32,
    /// Cell columns.
    pub columns: u32,
}

impl CheckerBoard {
    /// Board with the given grid size.
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// `(row, column)` of every filled cell, row-major.
    pub fn filled_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns)
                .filter(move |column| (row + column) % 2 == 0)
                .map(move |column| (row, column))
        })
    }
}

impl Shape for CheckerBoard {
    fn path(&self, rect: Rect) -> Path {
        let mut path = Path::new();
        if self.rows == 0 || self.columns == 0 {
            return path;
        }

        let row_size = rect.height() / f64::from(self.rows);
        let column_size = rect.width() / f64::from(self.columns);
        for (row, column) in self.filled_cells() {
            let x = rect.x0 + column_size * f64::from(column);
            let y = rect.y0 + row_size * f64::from(row);
            path.add_rect(Rect::new(x, y, x + column_size, y + row_size));
        }
        path
    }
}

impl Animatable for CheckerBoard {
    type Data = AnimatablePair<f64, f64>;

    fn animatable_data(&self) -> Self::Data {
        AnimatablePair::new(f64::from(self.rows), f64::from(self.columns))
    }

    /// Fractional counts truncate toward zero, so the grid refines in whole steps mid-flight.
    fn set_animatable_data(&mut self, data: Self::Data) {
        // `as` saturates: negatives and NaN land on 0.
        self.rows = data.first as u32;
        self.columns = data.second as u32;
    }
}
