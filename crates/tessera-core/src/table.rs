//! The [`Table`] type, a 3-axis grid of 16-bit tile values.
//!
//! A `Table` is a handle to shared storage: cloning yields another handle to
//! the **same** values, so a caller and a compositor can hold the one table.
//! Out-of-bounds reads return 0, writes outside the extent are ignored, and
//! every effective write raises the embedded [`Signal`] so watchers can
//! invalidate derived caches.
//!
//! Axes are (x, y, z); unused axes have extent 1. Map grids use all three
//! (z = layer), flag tables are indexed by tile id on x, flash tables are
//! (x, y).

use std::cell::RefCell;
use std::rc::Rc;

use crate::watch::{Signal, Watcher};

#[derive(Debug)]
struct TableData {
    xsize: i32,
    ysize: i32,
    zsize: i32,
    values: Vec<i16>,
    signal: Signal,
}

impl TableData {
    fn new(xsize: i32, ysize: i32, zsize: i32) -> Self {
        let xs = xsize.max(0);
        let ys = ysize.max(0);
        let zs = zsize.max(0);
        Self {
            xsize: xs,
            ysize: ys,
            zsize: zs,
            values: vec![0; (xs * ys * zs) as usize],
            signal: Signal::new(),
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        if x >= 0 && x < self.xsize && y >= 0 && y < self.ysize && z >= 0 && z < self.zsize {
            Some((x + y * self.xsize + z * self.xsize * self.ysize) as usize)
        } else {
            None
        }
    }
}

/// A shared 3-axis table of `i16` values.
#[derive(Clone, Debug)]
pub struct Table {
    inner: Rc<RefCell<TableData>>,
}

impl Table {
    /// Create a table of the given extents, zero filled. Negative extents
    /// clamp to 0 (an empty table reads 0 everywhere).
    pub fn new(xsize: i32, ysize: i32, zsize: i32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TableData::new(xsize, ysize, zsize))),
        }
    }

    /// Create a table seeded with `values` in x-major order (x fastest,
    /// then y, then z). Excess values are dropped, missing values read 0.
    pub fn from_values(xsize: i32, ysize: i32, zsize: i32, values: &[i16]) -> Self {
        let table = Self::new(xsize, ysize, zsize);
        {
            let mut data = table.inner.borrow_mut();
            let n = data.values.len().min(values.len());
            data.values[..n].copy_from_slice(&values[..n]);
        }
        table
    }

    /// Extent along x.
    #[inline]
    pub fn xsize(&self) -> i32 {
        self.inner.borrow().xsize
    }

    /// Extent along y.
    #[inline]
    pub fn ysize(&self) -> i32 {
        self.inner.borrow().ysize
    }

    /// Extent along z.
    #[inline]
    pub fn zsize(&self) -> i32 {
        self.inner.borrow().zsize
    }

    /// Read the value at (x, y, z). Out of bounds reads 0.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> i16 {
        let data = self.inner.borrow();
        data.index(x, y, z).map_or(0, |i| data.values[i])
    }

    /// Write the value at (x, y, z) and notify watchers. Out-of-bounds
    /// writes are ignored.
    pub fn set(&self, x: i32, y: i32, z: i32, value: i16) {
        let mut data = self.inner.borrow_mut();
        if let Some(i) = data.index(x, y, z) {
            data.values[i] = value;
            data.signal.notify();
        }
    }

    /// Fill the whole table with one value and notify watchers.
    pub fn fill(&self, value: i16) {
        let mut data = self.inner.borrow_mut();
        data.values.fill(value);
        data.signal.notify();
    }

    /// Resize the table, preserving values in the overlapping region, and
    /// notify watchers.
    pub fn resize(&self, xsize: i32, ysize: i32, zsize: i32) {
        let mut data = self.inner.borrow_mut();
        let mut next = TableData::new(xsize, ysize, zsize);

        let xs = data.xsize.min(next.xsize);
        let ys = data.ysize.min(next.ysize);
        let zs = data.zsize.min(next.zsize);
        for z in 0..zs {
            for y in 0..ys {
                for x in 0..xs {
                    // Both indices are in bounds by construction.
                    let src = (x + y * data.xsize + z * data.xsize * data.ysize) as usize;
                    let dst = (x + y * next.xsize + z * next.xsize * next.ysize) as usize;
                    next.values[dst] = data.values[src];
                }
            }
        }

        data.xsize = next.xsize;
        data.ysize = next.ysize;
        data.zsize = next.zsize;
        data.values = next.values;
        data.signal.notify();
    }

    /// Subscribe to edit notifications.
    pub fn watch(&self) -> Watcher {
        self.inner.borrow().signal.watch()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Table;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Wire form: extents plus x-major values. The notification signal is
    /// transient and starts fresh on deserialize.
    #[derive(Serialize, Deserialize)]
    struct TableRepr {
        xsize: i32,
        ysize: i32,
        zsize: i32,
        values: Vec<i16>,
    }

    impl Serialize for Table {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let data = self.inner.borrow();
            TableRepr {
                xsize: data.xsize,
                ysize: data.ysize,
                zsize: data.zsize,
                values: data.values.clone(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Table {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let repr = TableRepr::deserialize(deserializer)?;
            Ok(Table::from_values(
                repr.xsize,
                repr.ysize,
                repr.zsize,
                &repr.values,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reads_zero() {
        let t = Table::new(4, 3, 2);
        assert_eq!(t.xsize(), 4);
        assert_eq!(t.ysize(), 3);
        assert_eq!(t.zsize(), 2);
        assert_eq!(t.get(0, 0, 0), 0);
        assert_eq!(t.get(3, 2, 1), 0);
    }

    #[test]
    fn set_and_get() {
        let t = Table::new(4, 3, 2);
        t.set(2, 1, 1, 0x0800);
        assert_eq!(t.get(2, 1, 1), 0x0800);
    }

    #[test]
    fn out_of_bounds_reads_zero() {
        let t = Table::new(2, 2, 1);
        t.fill(7);
        assert_eq!(t.get(-1, 0, 0), 0);
        assert_eq!(t.get(0, -1, 0), 0);
        assert_eq!(t.get(2, 0, 0), 0);
        assert_eq!(t.get(0, 2, 0), 0);
        assert_eq!(t.get(0, 0, 1), 0);
    }

    #[test]
    fn out_of_bounds_writes_ignored() {
        let t = Table::new(2, 2, 1);
        let w = t.watch();
        t.set(5, 5, 0, 1);
        assert!(!w.is_raised());
        assert_eq!(t.get(5, 5, 0), 0);
    }

    #[test]
    fn clone_shares_storage() {
        let a = Table::new(3, 1, 1);
        let b = a.clone();
        b.set(1, 0, 0, 42);
        assert_eq!(a.get(1, 0, 0), 42);
    }

    #[test]
    fn writes_raise_watchers() {
        let t = Table::new(2, 2, 1);
        let w = t.watch();
        t.set(0, 0, 0, 1);
        assert!(w.take());
        t.fill(2);
        assert!(w.take());
        assert!(!w.is_raised());
    }

    #[test]
    fn from_values_x_major() {
        let t = Table::from_values(2, 2, 1, &[1, 2, 3, 4]);
        assert_eq!(t.get(0, 0, 0), 1);
        assert_eq!(t.get(1, 0, 0), 2);
        assert_eq!(t.get(0, 1, 0), 3);
        assert_eq!(t.get(1, 1, 0), 4);
    }

    #[test]
    fn resize_preserves_overlap() {
        let t = Table::from_values(2, 2, 1, &[1, 2, 3, 4]);
        let w = t.watch();
        t.resize(3, 1, 1);
        assert!(w.take());
        assert_eq!(t.get(0, 0, 0), 1);
        assert_eq!(t.get(1, 0, 0), 2);
        assert_eq!(t.get(2, 0, 0), 0);
        assert_eq!(t.get(0, 1, 0), 0);
    }

    #[test]
    fn empty_table_reads_zero() {
        let t = Table::new(0, 0, 0);
        assert_eq!(t.get(0, 0, 0), 0);
        t.set(0, 0, 0, 9);
        assert_eq!(t.get(0, 0, 0), 0);
    }
}
