//! MAT-file reader.
//!
//! Parses the subset of the Level 5 format the writer emits: little-endian,
//! uncompressed double/char/cell/struct arrays. Exists so written files can
//! be verified mechanically; it is not a general MAT-file loader.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{MatError, Result};
use crate::header::{HEADER_LEN, parse_file_header};
use crate::types::{
    MI_COMPRESSED, MI_DOUBLE, MI_INT8, MI_INT32, MI_MATRIX, MI_UINT16, MI_UINT32, MI_UTF8,
    MX_CELL, MX_CHAR, MX_DOUBLE, MX_STRUCT, MatDocument, MatStruct, MatValue, MatVariable,
};

/// MAT-file reader.
pub struct MatReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> MatReader<R> {
    /// Create a new MAT-file reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read the entire file into memory and parse it.
    pub fn read_document(mut self) -> Result<MatDocument> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        parse_mat_data(&data)
    }
}

impl MatReader<File> {
    /// Open a MAT-file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MatError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                MatError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read a MAT-file from a path.
pub fn read_mat(path: &Path) -> Result<MatDocument> {
    MatReader::open(path)?.read_document()
}

/// One data element: type code, payload slice, offset of the next element.
struct Element<'a> {
    mdtype: u32,
    data: &'a [u8],
    next: usize,
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    let bytes: [u8; 4] = data
        .get(offset..offset + 4)
        .ok_or(MatError::OutOfBounds { offset })?
        .try_into()
        .expect("slice length checked");
    Ok(u32::from_le_bytes(bytes))
}

/// Read the element starting at `offset`, handling the small-element form.
fn read_element(data: &[u8], offset: usize) -> Result<Element<'_>> {
    let word = read_u32(data, offset)?;
    if word >> 16 != 0 {
        // Small element: type and byte count share the first word.
        let mdtype = word & 0xFFFF;
        let count = (word >> 16) as usize;
        if count > 4 {
            return Err(MatError::invalid_format("small element longer than 4 bytes"));
        }
        let body = data
            .get(offset + 4..offset + 4 + count)
            .ok_or(MatError::OutOfBounds { offset })?;
        return Ok(Element {
            mdtype,
            data: body,
            next: offset + 8,
        });
    }
    let mdtype = word;
    let count = read_u32(data, offset + 4)? as usize;
    let body = data
        .get(offset + 8..offset + 8 + count)
        .ok_or(MatError::OutOfBounds { offset })?;
    Ok(Element {
        mdtype,
        data: body,
        next: offset + 8 + count + crate::writer::pad8(count),
    })
}

/// Parse a complete MAT-file byte buffer.
fn parse_mat_data(data: &[u8]) -> Result<MatDocument> {
    parse_file_header(data)?;
    let mut document = MatDocument::new();
    let mut offset = HEADER_LEN;
    while offset < data.len() {
        let element = read_element(data, offset)?;
        match element.mdtype {
            MI_MATRIX => {
                let (name, value) = parse_matrix(element.data)?;
                document.variables.push(MatVariable { name, value });
            }
            MI_COMPRESSED => return Err(MatError::Compressed),
            other => {
                return Err(MatError::UnsupportedType {
                    mdtype: other,
                    context: "top-level element",
                });
            }
        }
        offset = element.next;
    }
    Ok(document)
}

/// Parse one `miMATRIX` payload into a named value.
fn parse_matrix(body: &[u8]) -> Result<(String, MatValue)> {
    let mut offset = 0usize;

    // Array flags.
    let flags = read_element(body, offset)?;
    if flags.mdtype != MI_UINT32 || flags.data.len() < 4 {
        return Err(MatError::invalid_format("malformed array flags"));
    }
    let class = flags.data[0];
    offset = flags.next;

    // Dimensions.
    let dims_element = read_element(body, offset)?;
    if dims_element.mdtype != MI_INT32 {
        return Err(MatError::invalid_format("malformed dimensions"));
    }
    let dims: Vec<usize> = dims_element
        .data
        .chunks_exact(4)
        .map(|chunk| i32::from_le_bytes(chunk.try_into().expect("chunked by 4")) as usize)
        .collect();
    if dims.len() != 2 {
        return Err(MatError::invalid_format(format!(
            "expected 2 dimensions, found {}",
            dims.len()
        )));
    }
    let (rows, cols) = (dims[0], dims[1]);
    let count = rows * cols;
    offset = dims_element.next;

    // Array name.
    let name_element = read_element(body, offset)?;
    if name_element.mdtype != MI_INT8 {
        return Err(MatError::invalid_format("malformed array name"));
    }
    let name = String::from_utf8_lossy(name_element.data).into_owned();
    offset = name_element.next;

    let value = match class {
        MX_DOUBLE => {
            let element = read_element(body, offset)?;
            if element.mdtype != MI_DOUBLE {
                return Err(MatError::UnsupportedType {
                    mdtype: element.mdtype,
                    context: "numeric data",
                });
            }
            let data: Vec<f64> = element
                .data
                .chunks_exact(8)
                .map(|chunk| f64::from_le_bytes(chunk.try_into().expect("chunked by 8")))
                .collect();
            if data.len() != count {
                return Err(MatError::invalid_format("numeric data/dimension mismatch"));
            }
            MatValue::Numeric { rows, cols, data }
        }
        MX_CHAR => {
            let element = read_element(body, offset)?;
            let text = match element.mdtype {
                MI_UINT16 => {
                    let units: Vec<u16> = element
                        .data
                        .chunks_exact(2)
                        .map(|chunk| u16::from_le_bytes(chunk.try_into().expect("chunked by 2")))
                        .collect();
                    String::from_utf16(&units)
                        .map_err(|_| MatError::invalid_format("invalid UTF-16 character data"))?
                }
                MI_UTF8 => String::from_utf8_lossy(element.data).into_owned(),
                other => {
                    return Err(MatError::UnsupportedType {
                        mdtype: other,
                        context: "character data",
                    });
                }
            };
            MatValue::Char(text)
        }
        MX_CELL => {
            let mut cells = Vec::with_capacity(count);
            for _ in 0..count {
                let element = read_element(body, offset)?;
                if element.mdtype != MI_MATRIX {
                    return Err(MatError::UnsupportedType {
                        mdtype: element.mdtype,
                        context: "cell contents",
                    });
                }
                let (_, cell) = parse_matrix(element.data)?;
                cells.push(cell);
                offset = element.next;
            }
            MatValue::Cell(cells)
        }
        MX_STRUCT => {
            let slot_element = read_element(body, offset)?;
            if slot_element.mdtype != MI_INT32 || slot_element.data.len() < 4 {
                return Err(MatError::invalid_format("malformed field name length"));
            }
            let slot = i32::from_le_bytes(
                slot_element.data[..4].try_into().expect("length checked"),
            ) as usize;
            if slot == 0 {
                return Err(MatError::invalid_format("zero field name length"));
            }
            offset = slot_element.next;

            let names_element = read_element(body, offset)?;
            if names_element.mdtype != MI_INT8 {
                return Err(MatError::invalid_format("malformed field names"));
            }
            let fields: Vec<String> = names_element
                .data
                .chunks(slot)
                .map(|chunk| {
                    let end = chunk.iter().position(|&b| b == 0).unwrap_or(chunk.len());
                    String::from_utf8_lossy(&chunk[..end]).into_owned()
                })
                .collect();
            offset = names_element.next;

            let mut records = Vec::with_capacity(count);
            for _ in 0..count {
                let mut record = Vec::with_capacity(fields.len());
                for _ in 0..fields.len() {
                    let element = read_element(body, offset)?;
                    if element.mdtype != MI_MATRIX {
                        return Err(MatError::UnsupportedType {
                            mdtype: element.mdtype,
                            context: "struct field",
                        });
                    }
                    let (_, field_value) = parse_matrix(element.data)?;
                    record.push(field_value);
                    offset = element.next;
                }
                records.push(record);
            }
            MatValue::Struct(MatStruct { fields, records })
        }
        other => return Err(MatError::UnsupportedClass { class: other }),
    };

    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_element_parse() {
        // miINT8, 3 bytes inline.
        let word = MI_INT8 | (3 << 16);
        let mut data = word.to_le_bytes().to_vec();
        data.extend_from_slice(b"abc\0");
        let element = read_element(&data, 0).expect("parse");
        assert_eq!(element.mdtype, MI_INT8);
        assert_eq!(element.data, b"abc");
        assert_eq!(element.next, 8);
    }

    #[test]
    fn test_long_element_parse() {
        let mut data = MI_DOUBLE.to_le_bytes().to_vec();
        data.extend_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(&1.5f64.to_le_bytes());
        let element = read_element(&data, 0).expect("parse");
        assert_eq!(element.mdtype, MI_DOUBLE);
        assert_eq!(element.data.len(), 8);
        assert_eq!(element.next, 16);
    }

    #[test]
    fn test_truncated_element_rejected() {
        let data = MI_DOUBLE.to_le_bytes().to_vec();
        assert!(matches!(
            read_element(&data, 0),
            Err(MatError::OutOfBounds { .. })
        ));
    }
}
