//! Typed loading and splitting of the line dataset

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;

use super::MlError;

/// One row of the line dataset, loaded by header name.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LineRecord {
    #[serde(rename = "SolderingTemperature")]
    pub soldering_temperature: f64,
    #[serde(rename = "PlacementSpeed")]
    pub placement_speed: f64,
    #[serde(rename = "AmbientTemperature")]
    pub ambient_temperature: f64,
    #[serde(rename = "MaterialQuality")]
    pub material_quality: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "NumberOfDefects")]
    pub number_of_defects: f64,
    #[serde(rename = "CycleTime")]
    pub cycle_time: f64,
}

/// Which response column the regressor predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NumberOfDefects,
    CycleTime,
}

impl Label {
    pub fn column_name(&self) -> &'static str {
        match self {
            Label::NumberOfDefects => "NumberOfDefects",
            Label::CycleTime => "CycleTime",
        }
    }
}

impl LineRecord {
    /// Feature vector in column order (responses excluded).
    pub fn features(&self) -> [f64; 5] {
        [
            self.soldering_temperature,
            self.placement_speed,
            self.ambient_temperature,
            self.material_quality,
            self.humidity,
        ]
    }

    pub fn label(&self, label: Label) -> f64 {
        match label {
            Label::NumberOfDefects => self.number_of_defects,
            Label::CycleTime => self.cycle_time,
        }
    }
}

/// In-memory line dataset.
#[derive(Debug, Clone, Default)]
pub struct LineDataset {
    pub records: Vec<LineRecord>,
}

impl LineDataset {
    /// Load from a CSV file. Missing files are reported explicitly before
    /// any parse attempt.
    pub fn load(path: &Path) -> Result<Self, MlError> {
        if !path.exists() {
            return Err(MlError::FileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split into (train, test) by a seeded shuffle and fractional cut.
    /// `test_fraction` is clamped to [0,1].
    pub fn split(&self, test_fraction: f64, seed: u64) -> (LineDataset, LineDataset) {
        let mut shuffled = self.records.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);

        let fraction = test_fraction.clamp(0.0, 1.0);
        let test_count = (shuffled.len() as f64 * fraction).round() as usize;
        let train_count = shuffled.len() - test_count;

        let test = shuffled.split_off(train_count);
        (LineDataset { records: shuffled }, LineDataset { records: test })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_dataset(n: usize) -> LineDataset {
        let records = (0..n)
            .map(|i| {
                let x = i as f64;
                LineRecord {
                    soldering_temperature: 300.0 + x,
                    placement_speed: 50.0,
                    ambient_temperature: 22.0,
                    material_quality: 0.8,
                    humidity: 50.0,
                    number_of_defects: x * 0.1,
                    cycle_time: 1.0,
                }
            })
            .collect();
        LineDataset { records }
    }

    #[test]
    fn test_load_missing_file_is_explicit() {
        let err = LineDataset::load(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(err, MlError::FileNotFound(_)));
    }

    #[test]
    fn test_load_reads_rows_by_header_name() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp.as_file(),
            "SolderingTemperature,PlacementSpeed,AmbientTemperature,MaterialQuality,Humidity,NumberOfDefects,CycleTime"
        )
        .unwrap();
        writeln!(tmp.as_file(), "311.5,49.2,21.0,0.85,48.0,3.2,1.18").unwrap();

        let data = LineDataset::load(tmp.path()).unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data.records[0].soldering_temperature, 311.5);
        assert_eq!(data.records[0].cycle_time, 1.18);
    }

    #[test]
    fn test_split_partitions_all_records() {
        let data = sample_dataset(100);
        let (train, test) = data.split(0.2, 1);
        assert_eq!(test.len(), 20);
        assert_eq!(train.len(), 80);
    }

    #[test]
    fn test_split_is_deterministic_per_seed() {
        let data = sample_dataset(50);
        let (train_a, _) = data.split(0.3, 9);
        let (train_b, _) = data.split(0.3, 9);
        for (a, b) in train_a.records.iter().zip(&train_b.records) {
            assert_eq!(a.soldering_temperature, b.soldering_temperature);
        }
    }

    #[test]
    fn test_label_selects_column() {
        let data = sample_dataset(3);
        assert_eq!(data.records[2].label(Label::NumberOfDefects), 0.2);
        assert_eq!(data.records[2].label(Label::CycleTime), 1.0);
    }
}
