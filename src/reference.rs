use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, io::Read, path::Path};

/// One row of the zip code dataset. Other columns are ignored.
#[derive(Deserialize, Debug)]
struct ZipRow {
    zip: i64,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Zip code -> (latitude, longitude). Built once at startup, read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct ReferenceTable {
    coords: HashMap<i64, (f64, f64)>,
}

impl ReferenceTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open zip code database at {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("failed to parse zip code database {}", path.display()))
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
        let mut coords = HashMap::new();
        let mut skipped = 0usize;
        for (i, row) in reader.deserialize::<ZipRow>().enumerate() {
            let row = row.with_context(|| format!("bad record at row {}", i + 1))?;
            match (row.latitude, row.longitude) {
                // later rows override earlier ones for a repeated zip
                (Some(lat), Some(lon)) => {
                    coords.insert(row.zip, (lat, lon));
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::debug!("skipped {} zip rows without coordinates", skipped);
        }
        Ok(Self { coords })
    }

    pub fn lookup(&self, zip: i64) -> Option<(f64, f64)> {
        self.coords.get(&zip).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl FromIterator<(i64, (f64, f64))> for ReferenceTable {
    fn from_iter<T: IntoIterator<Item = (i64, (f64, f64))>>(iter: T) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}
