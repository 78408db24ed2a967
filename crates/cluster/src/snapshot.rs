use log::info;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use units::Time;

use crate::error::Result;
use crate::particles::ParticleSet;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot<'a> {
    time_yr: f64,
    particles: &'a ParticleSet,
}

/// Writes numbered JSON snapshots of the framework particle set.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    directory: PathBuf,
    written: usize,
}

impl SnapshotWriter {
    /// Creates `directory` if needed.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;
        Ok(Self {
            directory,
            written: 0,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, time: Time, particles: &ParticleSet) -> Result<PathBuf> {
        let path = self.directory.join(format!("snapshot_{:04}.json", self.written));
        write_snapshot(File::create(&path)?, time, particles)?;
        self.written += 1;
        info!("snapshot {} at {:.0} yr", path.display(), time.to_years());
        Ok(path)
    }
}

/// Buffered JSON encoding of one snapshot into `target`.
fn write_snapshot(target: impl Write, time: Time, particles: &ParticleSet) -> Result<()> {
    let mut writer = BufWriter::new(target);
    serde_json::to_writer(
        &mut writer,
        &Snapshot {
            time_yr: time.to_years(),
            particles,
        },
    )?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{Particle, ParticleKey};
    use units::Mass;

    #[test]
    fn snapshots_are_numbered_and_readable() {
        let directory = std::env::temp_dir().join(format!("cluster-snapshots-{}", std::process::id()));
        let mut writer = SnapshotWriter::new(&directory).unwrap();
        let particles: ParticleSet = [Particle::new(ParticleKey(7), Mass::from_solar_masses(0.5))]
            .into_iter()
            .collect();

        let first = writer.write(Time::from_years(5.0e4), &particles).unwrap();
        let second = writer.write(Time::from_years(1.0e5), &particles).unwrap();

        assert_eq!(writer.written(), 2);
        assert!(first.ends_with("snapshot_0000.json"));
        assert!(second.ends_with("snapshot_0001.json"));

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&second).unwrap()).unwrap();
        assert_eq!(json["timeYr"], 1.0e5);
        assert_eq!(json["particles"][0]["key"], 7);

        fs::remove_dir_all(&directory).unwrap();
    }

    /// Accepts nothing; BufWriter only notices when it flushes.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::StorageFull, "no space left"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_flush_is_an_error() {
        let particles: ParticleSet = [Particle::new(ParticleKey(1), Mass::from_solar_masses(1.0))]
            .into_iter()
            .collect();

        let result = write_snapshot(FullDisk, Time::from_years(1.0), &particles);
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
