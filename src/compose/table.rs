//! Themed table construction on top of the raw table shape.

use crate::common::unit::Emu;
use crate::common::{Error, Rect, Result};
use crate::pptx::{Align, Slide, Table, cell};
use crate::theme::{ColorToken, Theme};

/// A declarative table: header captions, data rows and optional layout
/// overrides. [`StyledTable::build`] turns it into a fully styled shape.
///
/// Data rows alternate fills by their physical row index, header included:
/// the first data row sits at row 1 and stays plain, row 2 gets the
/// alternate fill, and so on.
#[derive(Debug, Clone)]
pub struct StyledTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Option<Vec<Emu>>,
    header_size: f64,
    body_size: f64,
}

impl StyledTable {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            col_widths: None,
            header_size: 16.0,
            body_size: 14.0,
        }
    }

    /// Append one data row. Width is validated at build time.
    pub fn row<S: Into<String>>(mut self, cells: Vec<S>) -> Self {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn rows<S: Into<String>>(mut self, rows: Vec<Vec<S>>) -> Self {
        for row in rows {
            self.rows.push(row.into_iter().map(Into::into).collect());
        }
        self
    }

    /// Explicit column widths replacing the even split.
    pub fn col_widths(mut self, widths: Vec<Emu>) -> Self {
        self.col_widths = Some(widths);
        self
    }

    pub fn header_size(mut self, size: f64) -> Self {
        self.header_size = size;
        self
    }

    pub fn body_size(mut self, size: f64) -> Self {
        self.body_size = size;
        self
    }

    /// Validate the grid, then add and style the table shape.
    ///
    /// Fails before mutating the slide: a ragged row or bad width list
    /// leaves the slide untouched.
    pub fn build<'a>(self, slide: &'a mut Slide, theme: &Theme, rect: Rect) -> Result<&'a mut Table> {
        let cols = self.headers.len();
        if cols == 0 {
            return Err(Error::Other("table requires at least one header".into()));
        }
        for row in &self.rows {
            if row.len() != cols {
                return Err(Error::TableShape {
                    expected: cols,
                    got: row.len(),
                });
            }
        }
        if let Some(widths) = &self.col_widths {
            if widths.len() != cols {
                return Err(Error::TableShape {
                    expected: cols,
                    got: widths.len(),
                });
            }
        }
        theme.ensure_on_canvas(&rect)?;

        let table = slide.add_table(self.rows.len() + 1, cols, rect);
        if let Some(widths) = self.col_widths {
            table.set_col_widths(widths)?;
        }

        for (col, caption) in self.headers.iter().enumerate() {
            table.set_cell(
                0,
                col,
                cell(
                    caption,
                    self.header_size,
                    true,
                    theme.resolve(ColorToken::Page),
                    &theme.font,
                    Align::Center,
                    theme.resolve(ColorToken::TableHeader),
                ),
            )?;
        }

        for (index, row) in self.rows.iter().enumerate() {
            let physical_row = index + 1;
            let fill = if physical_row % 2 == 0 {
                ColorToken::RowAlt
            } else {
                ColorToken::RowPlain
            };
            for (col, text) in row.iter().enumerate() {
                table.set_cell(
                    physical_row,
                    col,
                    cell(
                        text,
                        self.body_size,
                        false,
                        theme.resolve(ColorToken::Text),
                        &theme.font,
                        Align::Left,
                        theme.resolve(fill),
                    ),
                )?;
            }
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::Slide;
    use proptest::prelude::*;

    fn build_table(rows: Vec<Vec<&str>>) -> (Slide, usize) {
        let theme = Theme::business();
        let mut slide = Slide::new();
        let count = rows.len();
        StyledTable::new(vec!["구분", "내용"])
            .rows(rows)
            .build(&mut slide, &theme, Rect::from_inches(0.6, 1.6, 12.0, 4.0))
            .unwrap();
        (slide, count)
    }

    #[test]
    fn test_header_styling() {
        let theme = Theme::business();
        let (slide, _) = build_table(vec![vec!["생산", "그레이수소"]]);
        let table = match &slide.shapes()[0] {
            crate::pptx::Shape::Table(table) => table,
            other => panic!("unexpected shape {other:?}"),
        };
        let header = table.cell(0, 0).unwrap();
        assert_eq!(header.fill, theme.table_header);
        assert!(header.paragraph.runs[0].bold);
        assert_eq!(header.paragraph.align, Align::Center);
        assert_eq!(header.text(), "구분");
    }

    #[test]
    fn test_header_only_table_is_legal() {
        let (slide, _) = build_table(Vec::new());
        assert_eq!(slide.shape_count(), 1);
    }

    #[test]
    fn test_ragged_row_fails_without_mutation() {
        let theme = Theme::business();
        let mut slide = Slide::new();
        let err = StyledTable::new(vec!["a", "b"])
            .row(vec!["only one"])
            .build(&mut slide, &theme, Rect::from_inches(1.0, 1.0, 10.0, 3.0))
            .unwrap_err();
        assert!(matches!(err, Error::TableShape { expected: 2, got: 1 }));
        assert_eq!(slide.shape_count(), 0);
    }

    #[test]
    fn test_empty_headers_rejected() {
        let theme = Theme::business();
        let mut slide = Slide::new();
        let err = StyledTable::new(Vec::<String>::new())
            .build(&mut slide, &theme, Rect::from_inches(1.0, 1.0, 10.0, 3.0))
            .unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }

    proptest! {
        #[test]
        fn prop_row_fills_alternate_by_physical_index(row_count in 0usize..12) {
            let theme = Theme::business();
            let mut slide = Slide::new();
            let rows: Vec<Vec<String>> = (0..row_count)
                .map(|i| vec![format!("r{i}"), format!("v{i}")])
                .collect();
            StyledTable::new(vec!["h1", "h2"])
                .rows(rows)
                .build(&mut slide, &theme, Rect::from_inches(0.6, 1.6, 12.0, 4.5))
                .unwrap();
            let table = match &slide.shapes()[0] {
                crate::pptx::Shape::Table(table) => table,
                _ => unreachable!(),
            };
            for index in 0..row_count {
                let physical_row = index + 1;
                let expected = if physical_row % 2 == 0 {
                    theme.row_alt
                } else {
                    theme.row_plain
                };
                prop_assert_eq!(table.cell(physical_row, 0).unwrap().fill, expected);
            }
        }
    }
}
