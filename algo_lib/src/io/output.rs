use std::io::Write;

const BUF_SIZE: usize = 1 << 16;

pub struct Output<'s> {
    output: &'s mut dyn Write,
    buf: Vec<u8>,
    auto_flush: bool,
}

impl<'s> Output<'s> {
    pub fn new(output: &'s mut dyn Write) -> Self {
        Self {
            output,
            buf: Vec::with_capacity(BUF_SIZE),
            auto_flush: false,
        }
    }

    /// Interactive tasks need every response flushed before the next read.
    pub fn new_with_auto_flush(output: &'s mut dyn Write) -> Self {
        Self {
            output,
            buf: Vec::new(),
            auto_flush: true,
        }
    }

    pub fn print<T: Writable>(&mut self, value: T) {
        value.write(self);
        self.maybe_flush();
    }

    pub fn print_line<T: Writable>(&mut self, value: T) {
        value.write(self);
        self.put(b"\n");
        self.maybe_flush();
    }

    pub fn print_per_line<T: Writable>(&mut self, values: &[T]) {
        for value in values {
            value.write(self);
            self.put(b"\n");
        }
        self.maybe_flush();
    }

    pub fn put(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
        if !self.auto_flush && self.buf.len() >= BUF_SIZE {
            self.write_buf();
        }
    }

    pub fn flush(&mut self) {
        self.write_buf();
        self.output.flush().expect("can't flush output");
    }

    fn maybe_flush(&mut self) {
        if self.auto_flush {
            self.flush();
        }
    }

    fn write_buf(&mut self) {
        self.output
            .write_all(&self.buf)
            .expect("can't write output");
        self.buf.clear();
    }
}

impl Drop for Output<'_> {
    fn drop(&mut self) {
        let _ = self.output.write_all(&self.buf);
        let _ = self.output.flush();
    }
}

pub trait Writable {
    fn write(&self, output: &mut Output);
}

impl Writable for str {
    fn write(&self, output: &mut Output) {
        output.put(self.as_bytes());
    }
}

impl Writable for String {
    fn write(&self, output: &mut Output) {
        output.put(self.as_bytes());
    }
}

impl Writable for char {
    fn write(&self, output: &mut Output) {
        let mut buf = [0u8; 4];
        output.put(self.encode_utf8(&mut buf).as_bytes());
    }
}

impl<T: Writable + ?Sized> Writable for &T {
    fn write(&self, output: &mut Output) {
        (**self).write(output);
    }
}

macro_rules! write_display {
    ($($t:ty)+) => {$(
        impl Writable for $t {
            fn write(&self, output: &mut Output) {
                output.put(self.to_string().as_bytes());
            }
        }
    )+};
}

write_display!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize f32 f64 bool);

impl<T: Writable> Writable for [T] {
    fn write(&self, output: &mut Output) {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                output.put(b" ");
            }
            value.write(output);
        }
    }
}

impl<T: Writable> Writable for Vec<T> {
    fn write(&self, output: &mut Output) {
        self.as_slice().write(output);
    }
}

impl<T: Writable, const N: usize> Writable for [T; N] {
    fn write(&self, output: &mut Output) {
        self.as_slice().write(output);
    }
}

macro_rules! write_tuple {
    ($first:ident : $first_idx:tt $(, $rest:ident : $rest_idx:tt)+) => {
        impl<$first: Writable, $($rest: Writable),+> Writable for ($first, $($rest),+) {
            fn write(&self, output: &mut Output) {
                self.$first_idx.write(output);
                $(
                    output.put(b" ");
                    self.$rest_idx.write(output);
                )+
            }
        }
    };
}

write_tuple!(A:0, B:1);
write_tuple!(A:0, B:1, C:2);
write_tuple!(A:0, B:1, C:2, D:3);
