// Plain-text Netpbm grayscale raster ("P2").
//
// Layout written:
//   P2
//   <width>
//   <height>
//   255
//   v v v ... (one grid row per line, every value followed by a space)

use std::io::{self, Read, Write};
use std::str::FromStr;

use plasma_core::Grid;
use plasma_core::utils::gray_level;

use crate::StorageError;

pub const MAGIC: &str = "P2";
pub const MAX_VALUE: u32 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgmHeader {
    pub width: usize,
    pub height: usize,
    pub max_value: u32,
}

// Values are saturated to [0, 255] so the file is always well-formed
pub fn write_pgm<W: Write>(grid: &Grid, mut out: W) -> io::Result<()> {
    let size = grid.size();
    write!(out, "{MAGIC}\n{size}\n{size}\n{MAX_VALUE}\n")?;
    for row in grid.rows() {
        for &v in row {
            write!(out, "{} ", gray_level(v))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn encode(grid: &Grid) -> String {
    let mut buf = Vec::with_capacity(grid.cells().len() * 4 + 32);
    // Writing into a Vec cannot fail
    let _ = write_pgm(grid, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn read_pgm<R: Read>(mut input: R) -> Result<Grid, StorageError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    decode(&text)
}

// Tokens are separated by any whitespace; '#' starts a comment running to end of line
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
}

fn header_field<T: FromStr>(token: Option<&str>, name: &str) -> Result<T, StorageError> {
    let token = token.ok_or_else(|| StorageError::Header(format!("missing {name}")))?;
    token
        .parse()
        .map_err(|_| StorageError::Header(format!("{name} {token:?} is not a number")))
}

pub fn decode(text: &str) -> Result<Grid, StorageError> {
    let mut tokens = tokens(text);

    match tokens.next() {
        Some(MAGIC) => {}
        Some(other) => {
            return Err(StorageError::Header(format!(
                "expected magic {MAGIC}, found {other:?}"
            )));
        }
        None => return Err(StorageError::Header("empty file".into())),
    }

    let header = PgmHeader {
        width: header_field(tokens.next(), "width")?,
        height: header_field(tokens.next(), "height")?,
        max_value: header_field(tokens.next(), "max value")?,
    };
    if header.width != header.height {
        return Err(StorageError::Header(format!(
            "raster is {}×{}, only square rasters are supported",
            header.width, header.height
        )));
    }
    if header.max_value == 0 || header.max_value > u32::from(u16::MAX) {
        return Err(StorageError::Header(format!(
            "max value {} outside 1..=65535",
            header.max_value
        )));
    }

    let mut grid = Grid::new(header.width)?;
    let expected = grid.cells().len();
    let max = header.max_value as i32;

    let mut found = 0;
    for (index, token) in tokens.enumerate() {
        let value = token
            .parse::<i32>()
            .ok()
            .filter(|v| (0..=max).contains(v))
            .ok_or_else(|| StorageError::Value {
                index,
                token: token.to_string(),
            })?;
        if index < expected {
            grid.cells_mut()[index] = value;
        }
        found += 1;
    }
    if found != expected {
        return Err(StorageError::ValueCount { expected, found });
    }
    Ok(grid)
}
