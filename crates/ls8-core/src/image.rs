//! Program images
//!
//! The loader's text format: one instruction or operand byte per line,
//! written as a binary string of up to eight `0`/`1` characters; `#`
//! starts a trailing comment; blank lines are skipped. Bytes land at
//! consecutive memory addresses starting from 0.

use crate::memory::MEM_SIZE;
use thiserror::Error;

/// Errors from parsing program text
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("invalid binary byte {token:?} on line {line}")]
    InvalidByte { line: usize, token: String },
    #[error("program is {bytes} bytes, more than fits in memory")]
    TooLarge { bytes: usize },
}

/// A parsed program image, ready to be loaded at address 0
#[derive(Debug, Clone)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    /// Parse program text into an image
    pub fn parse(text: &str) -> Result<Self, ImageError> {
        let mut bytes = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let token = raw.split('#').next().unwrap_or("").trim();
            if token.is_empty() {
                continue;
            }
            if token.len() > 8 || !token.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(ImageError::InvalidByte {
                    line,
                    token: token.to_string(),
                });
            }

            let mut value = 0u8;
            for bit in token.bytes() {
                value = (value << 1) | (bit - b'0');
            }
            bytes.push(value);
        }

        if bytes.len() > MEM_SIZE {
            return Err(ImageError::TooLarge { bytes: bytes.len() });
        }

        log::debug!("parsed program image: {} bytes", bytes.len());
        Ok(Self { bytes })
    }

    /// The image contents, in load order
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the image
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
