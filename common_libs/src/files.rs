use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use log::info;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ServiceError, ServiceErrorType, ServiceExuctionResult};

const FILE_NOT_FOUND: &str = "file.not.found";
const INVALID_CONTENT: &str = "invalid.content";

pub fn read_file_content<T: AsRef<str>>(file_name: T) -> ServiceExuctionResult<Vec<u8>> {
    let path = Path::new(file_name.as_ref());
    if file_name.as_ref().is_empty() || !path.exists() {
        return Err(ServiceError::throw(FILE_NOT_FOUND, ServiceErrorType::ResourceNotFound));
    }

    let content = fs::read(path)?;
    if content.is_empty() {
        Err(ServiceError::throw(INVALID_CONTENT, ServiceErrorType::ResourceNotFound))
    } else {
        Ok(content)
    }
}

/// Writes `entity` as pretty JSON. An empty file name logs it instead.
pub fn save<T>(file_name: &str, entity: &T) -> ServiceExuctionResult<()>
where
    T: ?Sized + Serialize,
{
    if !file_name.is_empty() {
        let writer = BufWriter::new(File::create(file_name)?);
        serde_json::to_writer_pretty(writer, entity)?;
    } else {
        info!("{}", serde_json::to_string_pretty(entity)?);
    }
    Ok(())
}

pub fn from_file<S: AsRef<str>, T>(file_name: S) -> ServiceExuctionResult<T>
where
    T: DeserializeOwned,
{
    let binary = read_file_content(file_name.as_ref())?;
    let content = String::from_utf8(binary)?;
    Ok(serde_json::from_str::<T>(&content)?)
}
