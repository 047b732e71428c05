use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::ErrorKind;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::{Context, Result, bail};
use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::model::LineItem;
use crate::util::read_json;

mod error;
#[cfg(test)]
mod fake;
mod headings;
mod images;
mod noise;
mod ocr_tools;
mod page_cache;
mod passes;
mod sections;
mod segmenter;
mod template;
mod totals;

pub use error::*;
#[cfg(test)]
pub use fake::*;
pub use headings::*;
pub use images::*;
pub use noise::*;
pub use ocr_tools::*;
pub use page_cache::*;
pub use passes::*;
pub use sections::*;
pub use segmenter::*;
pub use template::*;
pub use totals::*;
