use std::{fmt::Debug, fs, path::Path};

use scalars::Tolerance;
use serde::Deserialize;

use crate::prelude::*;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tolerance: Tolerance,
}

impl Config {
    #[instrument(name = "Reading the configuration…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() { Ok(toml::from_slice(&fs::read(path)?)?) } else { Ok(Self::default()) }
    }
}
