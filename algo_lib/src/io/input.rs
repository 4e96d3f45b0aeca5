use std::io::Read;

const DEFAULT_BUF_SIZE: usize = 1 << 16;

pub struct Input<'s> {
    input: &'s mut dyn Read,
    buf: Vec<u8>,
    at: usize,
    buf_read: usize,
}

impl<'s> Input<'s> {
    pub fn new(input: &'s mut dyn Read) -> Self {
        Self::new_with_size(input, DEFAULT_BUF_SIZE)
    }

    /// Interactive tasks should pass size 1 so the reader never pulls
    /// bytes the judge has not sent yet.
    pub fn new_with_size(input: &'s mut dyn Read, buf_size: usize) -> Self {
        Self {
            input,
            buf: vec![0; buf_size],
            at: 0,
            buf_read: 0,
        }
    }

    pub fn get(&mut self) -> Option<u8> {
        if self.refill_buffer() {
            let res = self.buf[self.at];
            self.at += 1;
            Some(res)
        } else {
            None
        }
    }

    pub fn peek(&mut self) -> Option<u8> {
        if self.refill_buffer() {
            Some(self.buf[self.at])
        } else {
            None
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !b.is_ascii_whitespace() {
                return;
            }
            self.get();
        }
    }

    /// True when only whitespace is left. Drives read-until-EOF tasks.
    pub fn is_exhausted(&mut self) -> bool {
        self.skip_whitespace();
        self.peek().is_none()
    }

    pub fn read<T: Readable>(&mut self) -> T {
        T::read(self)
    }

    pub fn read_vec<T: Readable>(&mut self, size: usize) -> Vec<T> {
        (0..size).map(|_| self.read()).collect()
    }

    pub fn read_token(&mut self) -> Vec<u8> {
        self.skip_whitespace();
        let mut res = Vec::new();
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                break;
            }
            res.push(b);
            self.get();
        }
        res
    }

    pub fn read_line(&mut self) -> String {
        let mut res = String::new();
        while let Some(b) = self.get() {
            if b == b'\n' {
                break;
            }
            if b == b'\r' {
                continue;
            }
            res.push(b as char);
        }
        res
    }

    fn refill_buffer(&mut self) -> bool {
        if self.at == self.buf_read {
            self.at = 0;
            self.buf_read = self.input.read(&mut self.buf).expect("can't read input");
        }
        self.buf_read != 0
    }
}

pub trait Readable {
    fn read(input: &mut Input) -> Self;
}

impl Readable for String {
    fn read(input: &mut Input) -> Self {
        let token = input.read_token();
        assert!(!token.is_empty(), "unexpected end of input");
        String::from_utf8(token).expect("input token is not utf8")
    }
}

impl Readable for char {
    fn read(input: &mut Input) -> Self {
        input.skip_whitespace();
        input.get().expect("unexpected end of input") as char
    }
}

macro_rules! read_float {
    ($($t:ident)+) => {$(
        impl Readable for $t {
            fn read(input: &mut Input) -> Self {
                String::read(input)
                    .parse()
                    .expect(concat!("can't parse ", stringify!($t)))
            }
        }
    )+};
}

read_float!(f32 f64);

macro_rules! read_unsigned {
    ($($t:ident)+) => {$(
        impl Readable for $t {
            fn read(input: &mut Input) -> Self {
                input.skip_whitespace();
                let mut res: $t = 0;
                let mut seen_digit = false;
                while let Some(b) = input.peek() {
                    if b.is_ascii_whitespace() {
                        break;
                    }
                    assert!(b.is_ascii_digit(), "expected digit, found {:?}", b as char);
                    res = res * 10 + (b - b'0') as $t;
                    seen_digit = true;
                    input.get();
                }
                assert!(seen_digit, "unexpected end of input");
                res
            }
        }
    )+};
}

read_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! read_signed {
    ($($t:ident)+) => {$(
        impl Readable for $t {
            fn read(input: &mut Input) -> Self {
                input.skip_whitespace();
                let negative = input.peek() == Some(b'-');
                if negative {
                    input.get();
                }
                // accumulated negative so that the type minimum parses
                let mut res: $t = 0;
                let mut seen_digit = false;
                while let Some(b) = input.peek() {
                    if b.is_ascii_whitespace() {
                        break;
                    }
                    assert!(b.is_ascii_digit(), "expected digit, found {:?}", b as char);
                    res = res * 10 - (b - b'0') as $t;
                    seen_digit = true;
                    input.get();
                }
                assert!(seen_digit, "unexpected end of input");
                if negative {
                    res
                } else {
                    -res
                }
            }
        }
    )+};
}

read_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! read_tuple {
    ($($name:ident)+) => {
        impl<$($name: Readable),+> Readable for ($($name,)+) {
            fn read(input: &mut Input) -> Self {
                ($($name::read(input),)+)
            }
        }
    };
}

read_tuple!(A B);
read_tuple!(A B C);
read_tuple!(A B C D);
