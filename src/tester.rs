use algo_lib::io::input::Input;
use algo_lib::io::output::Output;
use algo_lib::misc::task::Task;
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn task() -> Task {
    let json = include_str!("main.rs")
        .lines()
        .next()
        .expect("main.rs is empty")
        .trim_start_matches("//");
    serde_json::from_str(json).expect("first line of main.rs should be the task json")
}

fn write_samples(task: &Task) {
    fs::create_dir_all("tests").unwrap();
    for (i, test) in task.tests.iter().enumerate() {
        fs::write(format!("tests/{}.in", i + 1), &test.input).unwrap();
        fs::write(format!("tests/{}.out", i + 1), &test.output).unwrap();
    }
}

fn test_inputs() -> Vec<PathBuf> {
    let mut inputs = fs::read_dir("tests")
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "in"))
        .collect_vec();
    inputs.sort_by_key(|path| {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        (stem.parse::<u64>().ok(), stem.to_string())
    });
    inputs
}

fn outputs_match(expected: &str, actual: &str) -> bool {
    expected.split_whitespace().eq(actual.split_whitespace())
}

pub fn run_tests() -> bool {
    let task = task();
    if task.interactive || crate::solution::INTERACTIVE {
        eprintln!("Interactive task, sample tests are not run");
        return true;
    }
    if !Path::new("tests").exists() {
        write_samples(&task);
    }
    let mut all_passed = true;
    for input_path in test_inputs() {
        let name = input_path
            .file_stem()
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let input_data = fs::read_to_string(&input_path)
            .unwrap_or_else(|_| panic!("can't read {:?}", input_path));
        let expected = fs::read_to_string(input_path.with_extension("out")).ok();
        let mut input_bytes = input_data.as_bytes();
        let mut captured = Vec::new();
        let started = Instant::now();
        {
            let input = Input::new(&mut input_bytes);
            let output = Output::new(&mut captured);
            crate::solution::run(input, output);
        }
        let elapsed = started.elapsed().as_millis() as u64;
        let actual = String::from_utf8(captured).expect("solution printed invalid utf8");
        if elapsed > task.time_limit {
            all_passed = false;
            println!(
                "Test {}: time limit exceeded ({}ms, limit {}ms)",
                name, elapsed, task.time_limit
            );
            continue;
        }
        match &expected {
            Some(expected) if !outputs_match(expected, &actual) => {
                all_passed = false;
                println!("Test {}: wrong answer in {}ms", name, elapsed);
                println!("=== expected ===");
                println!("{}", expected.trim_end());
                println!("=== actual ===");
                println!("{}", actual.trim_end());
            }
            Some(_) => {
                println!("Test {}: OK in {}ms", name, elapsed);
            }
            None => {
                // no .out file, show the output instead of judging it
                println!("Test {}: finished in {}ms", name, elapsed);
                println!("{}", actual.trim_end());
            }
        }
    }
    all_passed
}
