/// Shadows [std::dbg]. Prints `name = value` through
/// [Pretty](crate::misc::pretty::Pretty) and stays silent in judge builds
/// (no `local` feature).
#[macro_export]
#[allow(unused_macros)]
macro_rules! dbg {
    ($first_val:expr, $($val:expr),+ $(,)?) => {
        if cfg!(feature = "local") {
            eprint!("[{}:{}] {} = {}",
                        file!(), line!(), stringify!($first_val),
                        $crate::misc::pretty::Pretty::pretty(&$first_val));
            $(eprint!(", {} = {}", stringify!($val),
                        $crate::misc::pretty::Pretty::pretty(&$val));)+
            eprintln!();
        }
    };
    ($first_val:expr) => {
        if cfg!(feature = "local") {
            eprintln!("[{}:{}] {} = {}",
                        file!(), line!(), stringify!($first_val),
                        $crate::misc::pretty::Pretty::pretty(&$first_val));
        }
    };
}

/// `dbg!` with binary renderings of integers.
#[macro_export]
#[allow(unused_macros)]
macro_rules! dbg_bin {
    ($first_val:expr, $($val:expr),+ $(,)?) => {
        if cfg!(feature = "local") {
            eprint!("[{}:{}] {} = {}",
                        file!(), line!(), stringify!($first_val),
                        $crate::misc::pretty::Pretty::pretty_bin(&$first_val));
            $(eprint!(", {} = {}", stringify!($val),
                        $crate::misc::pretty::Pretty::pretty_bin(&$val));)+
            eprintln!();
        }
    };
    ($first_val:expr) => {
        if cfg!(feature = "local") {
            eprintln!("[{}:{}] {} = {}",
                        file!(), line!(), stringify!($first_val),
                        $crate::misc::pretty::Pretty::pretty_bin(&$first_val));
        }
    };
}

#[cfg(test)]
mod dbg_macro_tests {
    #[test]
    fn expands_on_all_arities() {
        let v = vec![(1, 2), (3, 4)];
        crate::dbg!(v);
        crate::dbg!(1 + 1, "two", 'c');
        crate::dbg_bin!(5u8);
        crate::dbg_bin!(5u8, 6u8,);
    }
}
