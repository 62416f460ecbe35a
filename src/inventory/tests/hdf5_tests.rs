//! Inventory of HDF5 files written at test time.

use std::path::{Path, PathBuf};

use crate::data::Hdf5Container;
use crate::inventory::{InventoryWriter, SkippedMember, walk, write_inventory};

fn create_file(dir: &Path) -> PathBuf {
    let path = dir.join("1541962108935000000_167_838.h5");
    let file = hdf5::File::create(&path).unwrap();

    let a = file.create_group("A").unwrap();
    let b = a.create_group("B").unwrap();
    let x = b.new_dataset::<i32>().shape((2, 3)).create("x").unwrap();
    x.write_raw(&[1, 2, 3, 4, 5, 6][..]).unwrap();

    let trace = a.new_dataset::<f64>().shape(5).create("trace").unwrap();
    trace.write_raw(&[0.5; 5][..]).unwrap();

    file.create_group("Empty").unwrap();
    let counts = file.new_dataset::<u16>().shape((2, 2, 2)).create("counts").unwrap();
    counts.write_raw(&[7u16; 8][..]).unwrap();

    path
}

/// Add a soft link back to an ancestor, a hard alias of a dataset and a
/// dangling soft link.
fn add_links(path: &Path) {
    let file = hdf5::File::open_rw(path).unwrap();
    file.group("A/B").unwrap().link_soft("/A", "up").unwrap();
    file.link_hard("/A/B/x", "alias").unwrap();
    file.link_soft("/nowhere", "dangling").unwrap();
}

fn skipped(path: &str, reason: &str) -> SkippedMember {
    SkippedMember {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

fn run_inventory(path: &Path) -> String {
    let container = Hdf5Container::open(path).unwrap();
    let hierarchy = walk(&container).unwrap();

    let mut writer = InventoryWriter::new(Vec::new()).unwrap();
    write_inventory(&container, &hierarchy.datasets, &mut writer).unwrap();
    String::from_utf8(writer.finish().unwrap()).unwrap()
}

#[test]
fn test_hdf5_walk() {
    let dir = tempfile::tempdir().unwrap();
    let container = Hdf5Container::open(&create_file(dir.path())).unwrap();

    let hierarchy = walk(&container).unwrap();

    assert_eq!(hierarchy.groups, vec!["A", "A/B", "Empty"]);
    assert_eq!(hierarchy.datasets, vec!["A/B/x", "A/trace", "counts"]);
    assert!(hierarchy.skipped.is_empty());
}

#[test]
fn test_hdf5_inventory_rows() {
    let dir = tempfile::tempdir().unwrap();
    let text = run_inventory(&create_file(dir.path()));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Group,Subgroup,Name,Shape,Type,Size",
            "A,A/B,x,\"(2, 3)\",int32,6",
            "A,A,trace,\"(5,)\",float64,5",
            "counts,,counts,\"(2, 2, 2)\",uint16,8",
        ]
    );
}

#[test]
fn test_hdf5_walk_with_links() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_file(dir.path());
    add_links(&path);
    let container = Hdf5Container::open(&path).unwrap();

    let hierarchy = walk(&container).unwrap();

    assert_eq!(hierarchy.groups, vec!["A", "A/B", "Empty"]);
    assert_eq!(hierarchy.datasets, vec!["A/B/x", "A/trace", "counts"]);
    assert_eq!(
        hierarchy.skipped,
        vec![
            skipped("A/B/up", "soft link"),
            skipped("alias", "hard link to A/B/x"),
            skipped("dangling", "soft link"),
        ]
    );
}

#[test]
fn test_hdf5_links_do_not_add_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = create_file(dir.path());
    let plain = run_inventory(&path);

    add_links(&path);

    assert_eq!(run_inventory(&path), plain);
}
