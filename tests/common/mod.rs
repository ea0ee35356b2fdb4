use camino::Utf8PathBuf;
use nalgebra::Vector2;

use orrery::constants::AU;
use orrery::EphemerisTable;

/// Build an in-memory table of bodies on circular tracks, one sample per day.
///
/// Body `i` orbits at `radii_au[i]` astronomical units, advancing 0.01 rad per
/// sample, so its first-frame position sits on the +x axis at exactly its
/// radius.
pub fn circular_table(names: &[&str], radii_au: &[f64], rows: usize) -> EphemerisTable {
    assert_eq!(names.len(), radii_au.len());

    let times: Vec<f64> = (0..rows).map(|i| i as f64 * 86_400.0).collect();
    let positions = radii_au
        .iter()
        .map(|&radius| {
            (0..rows)
                .map(|i| {
                    let angle = i as f64 * 0.01;
                    Vector2::new(radius * AU * angle.cos(), radius * AU * angle.sin())
                })
                .collect()
        })
        .collect();

    EphemerisTable::from_parts(
        names.iter().map(|&n| n.to_string()).collect(),
        times,
        positions,
    )
    .unwrap()
}

/// Write `contents` to a unique temporary CSV file and return its path.
pub fn write_temp_csv(tag: &str, contents: &str) -> Utf8PathBuf {
    let path = std::env::temp_dir().join(format!("orrery-{}-{}.csv", std::process::id(), tag));
    std::fs::write(&path, contents).unwrap();
    Utf8PathBuf::from_path_buf(path).unwrap()
}
