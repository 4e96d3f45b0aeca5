//{"name":"a","group":"Manual","url":"","interactive":false,"timeLimit":2000,"tests":[{"input":"","output":""}],"testType":"single","input":{"type":"stdin","fileName":null,"pattern":null},"output":{"type":"stdout","fileName":null,"pattern":null}}
#[cfg(test)]
mod tester;

pub mod solution {
    use algo_lib::io::input::Input;
    use algo_lib::io::output::Output;
    use algo_lib::misc::task::TestType;

    pub const TEST_TYPE: TestType = TestType::Single;
    pub const INTERACTIVE: bool = false;

    #[allow(unused_variables)]
    pub fn solve(input: &mut Input, output: &mut Output, test_case: usize) {}

    pub fn run(mut input: Input, mut output: Output) {
        match TEST_TYPE {
            TestType::Single => solve(&mut input, &mut output, 1),
            TestType::MultiNumber => {
                let t: usize = input.read();
                for test_case in 1..=t {
                    solve(&mut input, &mut output, test_case);
                }
            }
            TestType::MultiEof => {
                let mut test_case = 1;
                while !input.is_exhausted() {
                    solve(&mut input, &mut output, test_case);
                    test_case += 1;
                }
            }
        }
        output.flush();
    }
}

//START MAIN
#[cfg(feature = "local")]
fn main() {
    use algo_lib::io::input::Input;
    use algo_lib::io::output::Output;
    use algo_lib::misc::timer::Timer;

    let timer = Timer::start();
    let mut input_file = std::fs::File::open("input.txt").expect("input.txt is missing");
    let input = Input::new(&mut input_file);
    let mut output_file = std::fs::File::create("output.txt").expect("can't create output.txt");
    let output = if crate::solution::INTERACTIVE {
        Output::new_with_auto_flush(&mut output_file)
    } else {
        Output::new(&mut output_file)
    };
    crate::solution::run(input, output);
    eprintln!();
    eprintln!("Time: {}ms", timer.elapsed_ms());
}

#[cfg(not(feature = "local"))]
fn main() {
    use algo_lib::io::input::Input;
    use algo_lib::io::output::Output;

    let mut stdin = std::io::stdin();
    let input = if crate::solution::INTERACTIVE {
        Input::new_with_size(&mut stdin, 1)
    } else {
        Input::new(&mut stdin)
    };
    let mut stdout = std::io::stdout();
    let output = if crate::solution::INTERACTIVE {
        Output::new_with_auto_flush(&mut stdout)
    } else {
        Output::new(&mut stdout)
    };
    crate::solution::run(input, output);
}
//END MAIN
