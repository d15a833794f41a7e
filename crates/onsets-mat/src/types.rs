//! Value model for MAT-file contents.
//!
//! A MAT-file is a sequence of named top-level arrays. The arrays this crate
//! handles are the ones onset structures need: double-precision numeric
//! arrays, character arrays, cell arrays, and struct arrays. Cell and struct
//! contents are themselves arrays, so a value is a tree; every leaf owns its
//! own independently sized data (the structures are ragged by design).

use crate::header::default_description;

/// Data type codes (`mi*` in the format documentation).
pub(crate) const MI_INT8: u32 = 1;
pub(crate) const MI_UINT16: u32 = 4;
pub(crate) const MI_INT32: u32 = 5;
pub(crate) const MI_UINT32: u32 = 6;
pub(crate) const MI_DOUBLE: u32 = 9;
pub(crate) const MI_MATRIX: u32 = 14;
pub(crate) const MI_COMPRESSED: u32 = 15;
pub(crate) const MI_UTF8: u32 = 16;

/// Array class codes (`mx*CLASS` in the format documentation).
pub(crate) const MX_CELL: u8 = 1;
pub(crate) const MX_STRUCT: u8 = 2;
pub(crate) const MX_CHAR: u8 = 4;
pub(crate) const MX_DOUBLE: u8 = 6;

/// Maximum MATLAB variable name length.
pub const MAX_NAME_LEN: usize = 63;

/// Maximum struct field name length (32-byte slots, null terminated).
pub const MAX_FIELD_NAME_LEN: usize = 31;

/// One array value.
#[derive(Debug, Clone, PartialEq)]
pub enum MatValue {
    /// Double-precision numeric array. `data.len() == rows * cols`.
    Numeric {
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    },
    /// Character array, written as a 1 x len row (0 x 0 when empty).
    Char(String),
    /// Cell array, one row of independently shaped cells.
    Cell(Vec<MatValue>),
    /// Struct array, one row of records.
    Struct(MatStruct),
}

/// A struct array: shared field list, one record per array element.
///
/// Invariant: every record has exactly `fields.len()` values.
#[derive(Debug, Clone, PartialEq)]
pub struct MatStruct {
    pub fields: Vec<String>,
    pub records: Vec<Vec<MatValue>>,
}

impl MatValue {
    /// Empty array (`[]`), 0 x 0.
    #[must_use]
    pub fn empty() -> Self {
        Self::Numeric {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// 1 x 1 scalar.
    #[must_use]
    pub fn scalar(value: f64) -> Self {
        Self::Numeric {
            rows: 1,
            cols: 1,
            data: vec![value],
        }
    }

    /// 1 x N row vector; an empty input becomes the empty array.
    #[must_use]
    pub fn row(values: Vec<f64>) -> Self {
        if values.is_empty() {
            return Self::empty();
        }
        Self::Numeric {
            rows: 1,
            cols: values.len(),
            data: values,
        }
    }

    /// Character array from a string.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Char(value.into())
    }

    /// Array dimensions as written to the dimensions subelement.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        match self {
            Self::Numeric { rows, cols, .. } => (*rows, *cols),
            Self::Char(s) => {
                let len = s.encode_utf16().count();
                if len == 0 { (0, 0) } else { (1, len) }
            }
            Self::Cell(cells) => {
                if cells.is_empty() {
                    (0, 0)
                } else {
                    (1, cells.len())
                }
            }
            Self::Struct(st) => {
                if st.records.is_empty() {
                    (0, 0)
                } else {
                    (1, st.records.len())
                }
            }
        }
    }

    pub(crate) fn class(&self) -> u8 {
        match self {
            Self::Numeric { .. } => MX_DOUBLE,
            Self::Char(_) => MX_CHAR,
            Self::Cell(_) => MX_CELL,
            Self::Struct(_) => MX_STRUCT,
        }
    }
}

/// A named top-level array.
#[derive(Debug, Clone, PartialEq)]
pub struct MatVariable {
    pub name: String,
    pub value: MatValue,
}

/// The full contents of one MAT-file, in write order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatDocument {
    pub variables: Vec<MatVariable>,
}

impl MatDocument {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named variable.
    pub fn push(&mut self, name: impl Into<String>, value: MatValue) {
        self.variables.push(MatVariable {
            name: name.into(),
            value,
        });
    }

    /// Look up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MatValue> {
        self.variables
            .iter()
            .find(|var| var.name == name)
            .map(|var| &var.value)
    }
}

/// Options for writing MAT-files.
#[derive(Debug, Clone)]
pub struct MatWriterOptions {
    /// Descriptive text for the 116-byte header field.
    pub description: String,
}

impl Default for MatWriterOptions {
    fn default() -> Self {
        Self {
            description: default_description(),
        }
    }
}
