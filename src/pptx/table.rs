//! Table shape: a fixed grid of single-paragraph cells.

use super::text::{Align, Anchor, Margins, Paragraph};
use crate::common::unit::{Emu, inches_to_emu};
use crate::common::{Error, Rect, Result, RgbColor};
use std::fmt::Write as FmtWrite;

/// One table cell: a paragraph of text, a solid fill, alignment, anchoring
/// and fixed inset margins.
#[derive(Debug, Clone)]
pub struct Cell {
    pub fill: RgbColor,
    pub margins: Margins,
    pub anchor: Anchor,
    pub paragraph: Paragraph,
}

impl Cell {
    fn empty() -> Self {
        Self {
            fill: RgbColor::new(0xFF, 0xFF, 0xFF),
            margins: default_cell_margins(),
            anchor: Anchor::Middle,
            paragraph: Paragraph::default(),
        }
    }

    /// Concatenated run text of the cell.
    pub fn text(&self) -> String {
        self.paragraph
            .runs
            .iter()
            .map(|r| r.text.as_str())
            .collect()
    }

    fn write_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:tc>");
        xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
        self.paragraph.write_xml(xml)?;
        xml.push_str("</a:txBody>");
        write!(
            xml,
            r#"<a:tcPr marL="{}" marR="{}" marT="{}" marB="{}" anchor="{}">"#,
            self.margins.left,
            self.margins.right,
            self.margins.top,
            self.margins.bottom,
            self.anchor.attr()
        )?;
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            self.fill.to_hex()
        )?;
        xml.push_str("</a:tcPr>");
        xml.push_str("</a:tc>");
        Ok(())
    }
}

/// A `rows x cols` grid with explicit column widths and equal row heights.
#[derive(Debug, Clone)]
pub struct Table {
    pub rect: Rect,
    /// Per-column widths; always `cols` entries summing to `rect.width`
    pub col_widths: Vec<Emu>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table of empty white cells. Columns split the rectangle
    /// width evenly until explicit widths are assigned.
    pub(crate) fn new(rows: usize, cols: usize, rect: Rect) -> Self {
        let col_widths = split_evenly(rect.width, cols);
        let rows = (0..rows)
            .map(|_| (0..cols).map(|_| Cell::empty()).collect())
            .collect();
        Self {
            rect,
            col_widths,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Replace a cell. Out-of-range coordinates are a caller error.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let rows = self.rows.len();
        let cols = self.col_widths.len();
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| {
                Error::Other(format!(
                    "cell ({row}, {col}) out of range for {rows}x{cols} table"
                ))
            })?;
        *slot = cell;
        Ok(())
    }

    /// Assign explicit column widths. The count must match the grid.
    pub fn set_col_widths(&mut self, widths: Vec<Emu>) -> Result<()> {
        if widths.len() != self.col_widths.len() {
            return Err(Error::TableShape {
                expected: self.col_widths.len(),
                got: widths.len(),
            });
        }
        self.col_widths = widths;
        Ok(())
    }

    pub(crate) fn write_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(xml, r#"<p:cNvPr id="{shape_id}" name="Table {shape_id}"/>"#)?;
        xml.push_str("<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp=\"1\"/></p:cNvGraphicFramePr>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");

        xml.push_str("<p:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.rect.left, self.rect.top)?;
        write!(
            xml,
            r#"<a:ext cx="{}" cy="{}"/>"#,
            self.rect.width, self.rect.height
        )?;
        xml.push_str("</p:xfrm>");

        xml.push_str(
            r#"<a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">"#,
        );
        xml.push_str("<a:tbl>");
        xml.push_str("<a:tblPr/>");
        xml.push_str("<a:tblGrid>");
        for width in &self.col_widths {
            write!(xml, r#"<a:gridCol w="{width}"/>"#)?;
        }
        xml.push_str("</a:tblGrid>");

        // Row heights are implicit: the frame height split evenly
        let heights = split_evenly(self.rect.height, self.rows.len());
        for (row, height) in self.rows.iter().zip(heights) {
            write!(xml, r#"<a:tr h="{height}">"#)?;
            for cell in row {
                cell.write_xml(xml)?;
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        xml.push_str("</a:graphicData></a:graphic>");
        xml.push_str("</p:graphicFrame>");
        Ok(())
    }
}

/// Split a length into `n` near-equal parts that sum exactly to `total`.
fn split_evenly(total: Emu, n: usize) -> Vec<Emu> {
    if n == 0 {
        return Vec::new();
    }
    let base = total / n as Emu;
    let mut parts = vec![base; n];
    if let Some(last) = parts.last_mut() {
        *last = total - base * (n as Emu - 1);
    }
    parts
}

/// Default cell margins used by the styling layer: 0.08 in horizontal,
/// 0.04 in vertical.
pub fn default_cell_margins() -> Margins {
    Margins::new(
        inches_to_emu(0.08),
        inches_to_emu(0.08),
        inches_to_emu(0.04),
        inches_to_emu(0.04),
    )
}

/// Convenience constructor for a single-paragraph cell.
pub fn cell(
    text: &str,
    size: f64,
    bold: bool,
    color: RgbColor,
    font: &str,
    align: Align,
    fill: RgbColor,
) -> Cell {
    let mut paragraph = Paragraph {
        align,
        ..Default::default()
    };
    paragraph.add_run(text, size, bold, color, font);
    Cell {
        fill,
        margins: default_cell_margins(),
        anchor: Anchor::Middle,
        paragraph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_evenly_preserves_total() {
        let parts = split_evenly(1_000_003, 4);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts.iter().sum::<Emu>(), 1_000_003);
    }

    #[test]
    fn test_fresh_cells_carry_default_margins() {
        let table = Table::new(2, 2, Rect::new(0, 0, 1000, 500));
        let fresh = table.cell(1, 1).unwrap();
        assert_eq!(fresh.margins, default_cell_margins());
        let styled = cell(
            "x",
            14.0,
            false,
            RgbColor::new(0x33, 0x33, 0x33),
            "맑은 고딕",
            Align::Left,
            RgbColor::new(0xFF, 0xFF, 0xFF),
        );
        assert_eq!(styled.margins, fresh.margins);
    }

    #[test]
    fn test_even_column_split_by_default() {
        let table = Table::new(2, 3, Rect::new(0, 0, 900, 300));
        assert_eq!(table.col_widths, vec![300, 300, 300]);
    }

    #[test]
    fn test_set_col_widths_rejects_mismatch() {
        let mut table = Table::new(1, 3, Rect::new(0, 0, 900, 100));
        let err = table.set_col_widths(vec![450, 450]).unwrap_err();
        assert!(matches!(
            err,
            crate::common::Error::TableShape {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn test_table_xml_structure() {
        let mut table = Table::new(2, 2, Rect::new(0, 0, 1000, 500));
        table
            .set_cell(
                0,
                0,
                cell(
                    "구분",
                    16.0,
                    true,
                    RgbColor::new(0xFF, 0xFF, 0xFF),
                    "맑은 고딕",
                    Align::Center,
                    RgbColor::new(0x1B, 0x3A, 0x5C),
                ),
            )
            .unwrap();
        let mut xml = String::new();
        table.write_xml(&mut xml, 5).unwrap();
        assert!(xml.contains("drawingml/2006/table"));
        assert_eq!(xml.matches("<a:gridCol").count(), 2);
        assert_eq!(xml.matches("<a:tr ").count(), 2);
        assert_eq!(xml.matches("<a:tc>").count(), 4);
        assert!(xml.contains(r#"anchor="ctr""#));
    }
}
