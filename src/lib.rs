#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod error;
pub mod params;
pub mod props;
pub mod stats;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;
