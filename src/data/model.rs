// ---------------------------------------------------------------------------
// NumericRow – one parsed line
// ---------------------------------------------------------------------------

/// The values of one text line, in field order.
pub type NumericRow = Vec<f64>;

// ---------------------------------------------------------------------------
// Matrix – the complete loaded file
// ---------------------------------------------------------------------------

/// Rows of a loaded file. Rows may differ in length; nothing enforces a
/// rectangular shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    rows: Vec<NumericRow>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<NumericRow>) -> Self {
        Matrix { rows }
    }

    pub fn push(&mut self, row: NumericRow) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[NumericRow] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Length of the first row, or 0 for an empty matrix.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NumericRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a NumericRow;
    type IntoIter = std::slice::Iter<'a, NumericRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl From<Vec<NumericRow>> for Matrix {
    fn from(rows: Vec<NumericRow>) -> Self {
        Matrix::from_rows(rows)
    }
}
