use super::IoError;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

pub fn is_gzip(path: &str) -> bool {
    path.ends_with(".gz")
}

/// opens a file for reading, decompressing it if its name ends with `.gz`.
pub fn open_reader(path: &str) -> Result<Box<dyn Read>, IoError> {
    let f = File::open(path).map_err(|source| IoError::FileError {
        path: String::from(path),
        source,
    })?;
    let r: Box<dyn Read> = if is_gzip(path) {
        Box::new(BufReader::new(GzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(r)
}

/// creates a file for writing, compressing it if its name ends with `.gz`.
///
/// # Errors
///
/// [`IoError::FileExists`] if the file exists and `overwrite` is false.
pub fn open_writer(path: &str, overwrite: bool) -> Result<Box<dyn Write>, IoError> {
    if Path::new(path).exists() && !overwrite {
        return Err(IoError::FileExists {
            path: String::from(path),
        });
    }
    let f = File::create(path).map_err(|source| IoError::FileError {
        path: String::from(path),
        source,
    })?;
    let w: Box<dyn Write> = if is_gzip(path) {
        Box::new(GzEncoder::new(BufWriter::new(f), Compression::default()))
    } else {
        Box::new(BufWriter::new(f))
    };
    Ok(w)
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, IoError> {
    let reader = open_reader(path)?;
    serde_json::from_reader(reader).map_err(|source| IoError::JsonError {
        path: String::from(path),
        source,
    })
}

pub fn write_json<T: Serialize>(path: &str, value: &T, overwrite: bool) -> Result<(), IoError> {
    let mut writer = open_writer(path, overwrite)?;
    serde_json::to_writer(&mut writer, value).map_err(|source| IoError::JsonError {
        path: String::from(path),
        source,
    })?;
    writer.flush().map_err(|source| IoError::FileError {
        path: String::from(path),
        source,
    })
}
