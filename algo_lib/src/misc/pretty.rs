use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Write;

/// Debug rendering for the `dbg!`/`dbg_bin!` macros. Pairs come out as
/// `{a, b}`, sequences as `{x, y, z}`, so nested containers stay readable.
/// Binary mode appends the full-width two's-complement bits to integers.
pub trait Pretty {
    fn fmt_pretty(&self, out: &mut String, binary: bool);

    fn pretty(&self) -> String {
        let mut res = String::new();
        self.fmt_pretty(&mut res, false);
        res
    }

    fn pretty_bin(&self) -> String {
        let mut res = String::new();
        self.fmt_pretty(&mut res, true);
        res
    }
}

impl<T: Pretty + ?Sized> Pretty for &T {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        (**self).fmt_pretty(out, binary);
    }
}

macro_rules! pretty_integer {
    ($($t:ident)+) => {$(
        impl Pretty for $t {
            fn fmt_pretty(&self, out: &mut String, binary: bool) {
                write!(out, "{}", self).unwrap();
                if binary {
                    write!(out, "[{:0width$b}]", self, width = $t::BITS as usize).unwrap();
                }
            }
        }
    )+};
}

pretty_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

macro_rules! pretty_display {
    ($($t:ty)+) => {$(
        impl Pretty for $t {
            fn fmt_pretty(&self, out: &mut String, _binary: bool) {
                write!(out, "{}", self).unwrap();
            }
        }
    )+};
}

pretty_display!(f32 f64 bool);

impl Pretty for char {
    fn fmt_pretty(&self, out: &mut String, _binary: bool) {
        write!(out, "'{}'", self).unwrap();
    }
}

impl Pretty for str {
    fn fmt_pretty(&self, out: &mut String, _binary: bool) {
        write!(out, "\"{}\"", self).unwrap();
    }
}

impl Pretty for String {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        self.as_str().fmt_pretty(out, binary);
    }
}

impl<T: Pretty, U: Pretty> Pretty for (T, U) {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        out.push('{');
        self.0.fmt_pretty(out, binary);
        out.push_str(", ");
        self.1.fmt_pretty(out, binary);
        out.push('}');
    }
}

impl<T: Pretty, U: Pretty, V: Pretty> Pretty for (T, U, V) {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        out.push('{');
        self.0.fmt_pretty(out, binary);
        out.push_str(", ");
        self.1.fmt_pretty(out, binary);
        out.push_str(", ");
        self.2.fmt_pretty(out, binary);
        out.push('}');
    }
}

fn fmt_seq<'a, T: Pretty + 'a>(
    items: impl Iterator<Item = &'a T>,
    out: &mut String,
    binary: bool,
) {
    out.push('{');
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item.fmt_pretty(out, binary);
    }
    out.push('}');
}

impl<T: Pretty> Pretty for [T] {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_seq(self.iter(), out, binary);
    }
}

impl<T: Pretty> Pretty for Vec<T> {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_seq(self.iter(), out, binary);
    }
}

impl<T: Pretty, const N: usize> Pretty for [T; N] {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_seq(self.iter(), out, binary);
    }
}

impl<T: Pretty> Pretty for VecDeque<T> {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_seq(self.iter(), out, binary);
    }
}

impl<T: Pretty> Pretty for BTreeSet<T> {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_seq(self.iter(), out, binary);
    }
}

impl<T: Pretty, S> Pretty for HashSet<T, S> {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_seq(self.iter(), out, binary);
    }
}

fn fmt_map<'a, K: Pretty + 'a, V: Pretty + 'a>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
    out: &mut String,
    binary: bool,
) {
    out.push('{');
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('{');
        key.fmt_pretty(out, binary);
        out.push_str(", ");
        value.fmt_pretty(out, binary);
        out.push('}');
    }
    out.push('}');
}

impl<K: Pretty, V: Pretty> Pretty for BTreeMap<K, V> {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_map(self.iter(), out, binary);
    }
}

impl<K: Pretty, V: Pretty, S> Pretty for HashMap<K, V, S> {
    fn fmt_pretty(&self, out: &mut String, binary: bool) {
        fmt_map(self.iter(), out, binary);
    }
}
