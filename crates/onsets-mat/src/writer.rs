//! MAT-file writer.
//!
//! Serializes a [`MatDocument`] to the Level 5 format, little-endian,
//! uncompressed, with 1-D numeric data in row orientation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{MatError, Result};
use crate::header::build_file_header;
use crate::types::{
    MAX_FIELD_NAME_LEN, MAX_NAME_LEN, MI_DOUBLE, MI_INT8, MI_INT32, MI_MATRIX, MI_UINT16,
    MI_UINT32, MatDocument, MatValue, MatWriterOptions,
};

/// MAT-file writer.
pub struct MatWriter<W: Write> {
    writer: BufWriter<W>,
    options: MatWriterOptions,
}

impl<W: Write> MatWriter<W> {
    /// Create a new MAT-file writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options: MatWriterOptions::default(),
        }
    }

    /// Create a new MAT-file writer with options.
    pub fn with_options(writer: W, options: MatWriterOptions) -> Self {
        Self {
            writer: BufWriter::new(writer),
            options,
        }
    }

    /// Write a document to the file.
    pub fn write_document(mut self, document: &MatDocument) -> Result<()> {
        validate_document(document)?;
        self.writer
            .write_all(&build_file_header(&self.options.description))?;
        for variable in &document.variables {
            let element = matrix_element(&variable.name, &variable.value);
            self.writer.write_all(&element)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl MatWriter<File> {
    /// Create a MAT-file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }

    /// Create a MAT-file with options.
    pub fn create_with_options(path: &Path, options: MatWriterOptions) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::with_options(file, options))
    }
}

/// Write a document to a MAT-file.
///
/// Convenience function that creates the file and writes the document.
pub fn write_mat(path: &Path, document: &MatDocument) -> Result<()> {
    MatWriter::create(path)?.write_document(document)
}

/// Write a document to a MAT-file with options.
pub fn write_mat_with_options(
    path: &Path,
    document: &MatDocument,
    options: &MatWriterOptions,
) -> Result<()> {
    MatWriter::create_with_options(path, options.clone())?.write_document(document)
}

/// Validate a document before writing.
fn validate_document(document: &MatDocument) -> Result<()> {
    for variable in &document.variables {
        if !is_valid_identifier(&variable.name) {
            return Err(MatError::invalid_variable_name(&variable.name));
        }
        validate_value(&variable.name, &variable.value)?;
    }
    Ok(())
}

fn validate_value(name: &str, value: &MatValue) -> Result<()> {
    match value {
        MatValue::Numeric { rows, cols, data } => {
            if data.len() != rows * cols {
                return Err(MatError::DimensionMismatch {
                    name: name.to_string(),
                    rows: *rows,
                    cols: *cols,
                    actual: data.len(),
                });
            }
        }
        MatValue::Char(_) => {}
        MatValue::Cell(cells) => {
            for cell in cells {
                validate_value(name, cell)?;
            }
        }
        MatValue::Struct(st) => {
            for field in &st.fields {
                if field.is_empty() || field.len() > MAX_FIELD_NAME_LEN {
                    return Err(MatError::field_name_too_long(field));
                }
            }
            for record in &st.records {
                if record.len() != st.fields.len() {
                    return Err(MatError::FieldCountMismatch {
                        expected: st.fields.len(),
                        actual: record.len(),
                    });
                }
                for field_value in record {
                    validate_value(name, field_value)?;
                }
            }
        }
    }
    Ok(())
}

/// MATLAB identifier: ASCII letter, then letters/digits/underscore, max 63.
fn is_valid_identifier(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_alphabetic() && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Padding needed to reach the next 8-byte boundary.
pub(crate) fn pad8(len: usize) -> usize {
    (8 - len % 8) % 8
}

/// Append one data element: 8-byte tag plus payload padded to 8 bytes.
/// Payloads of at most 4 bytes use the packed small-element form.
fn push_element(buf: &mut Vec<u8>, mdtype: u32, data: &[u8]) {
    if data.len() <= 4 {
        let word = mdtype | ((data.len() as u32) << 16);
        buf.extend_from_slice(&word.to_le_bytes());
        let mut inline = [0u8; 4];
        inline[..data.len()].copy_from_slice(data);
        buf.extend_from_slice(&inline);
    } else {
        buf.extend_from_slice(&mdtype.to_le_bytes());
        buf.extend_from_slice(&(data.len() as u32).to_le_bytes());
        buf.extend_from_slice(data);
        buf.resize(buf.len() + pad8(data.len()), 0);
    }
}

/// Serialize one array as a complete `miMATRIX` element, tag included.
///
/// Nested arrays (cells, struct fields) are written with an empty name.
fn matrix_element(name: &str, value: &MatValue) -> Vec<u8> {
    let mut payload = Vec::new();

    // Array flags: class code in the low byte, no logical/global/complex flags.
    let mut flags = [0u8; 8];
    flags[..4].copy_from_slice(&u32::from(value.class()).to_le_bytes());
    push_element(&mut payload, MI_UINT32, &flags);

    // Dimensions.
    let (rows, cols) = value.dims();
    let mut dims = Vec::with_capacity(8);
    dims.extend_from_slice(&(rows as i32).to_le_bytes());
    dims.extend_from_slice(&(cols as i32).to_le_bytes());
    push_element(&mut payload, MI_INT32, &dims);

    // Array name.
    push_element(&mut payload, MI_INT8, name.as_bytes());

    match value {
        MatValue::Numeric { data, .. } => {
            let mut bytes = Vec::with_capacity(data.len() * 8);
            for v in data {
                bytes.extend_from_slice(&v.to_le_bytes());
            }
            push_element(&mut payload, MI_DOUBLE, &bytes);
        }
        MatValue::Char(s) => {
            let mut bytes = Vec::new();
            for unit in s.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            push_element(&mut payload, MI_UINT16, &bytes);
        }
        MatValue::Cell(cells) => {
            for cell in cells {
                payload.extend_from_slice(&matrix_element("", cell));
            }
        }
        MatValue::Struct(st) => {
            // Field name slot length: longest name plus null terminator.
            let slot = st.fields.iter().map(String::len).max().unwrap_or(0) + 1;
            push_element(&mut payload, MI_INT32, &(slot as i32).to_le_bytes());
            let mut names = vec![0u8; slot * st.fields.len()];
            for (idx, field) in st.fields.iter().enumerate() {
                names[idx * slot..idx * slot + field.len()].copy_from_slice(field.as_bytes());
            }
            push_element(&mut payload, MI_INT8, &names);
            for record in &st.records {
                for field_value in record {
                    payload.extend_from_slice(&matrix_element("", field_value));
                }
            }
        }
    }

    let mut element = Vec::with_capacity(8 + payload.len());
    element.extend_from_slice(&MI_MATRIX.to_le_bytes());
    element.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    element.extend_from_slice(&payload);
    element
}
