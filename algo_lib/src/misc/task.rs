use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IOEnum {
    #[serde(rename = "stdin")]
    StdIn,
    #[serde(rename = "stdout")]
    StdOut,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "regex")]
    Regex,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct IOType {
    #[serde(rename = "type")]
    pub io_type: IOEnum,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    pub pattern: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Test {
    pub input: String,
    pub output: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestType {
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "multiNumber")]
    MultiNumber,
    #[serde(rename = "multiEof")]
    MultiEof,
}

/// Task descriptor embedded as the first line of a solution's `main.rs`,
/// in the Competitive Companion wire format (hence the camelCase renames).
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Task {
    pub name: String,
    pub group: String,
    pub url: String,
    pub interactive: bool,
    #[serde(rename = "timeLimit")]
    pub time_limit: u64,
    pub tests: Vec<Test>,
    #[serde(rename = "testType")]
    pub test_type: TestType,
    pub input: IOType,
    pub output: IOType,
}

#[cfg(test)]
mod task_tests {
    use super::{IOEnum, Task, TestType};

    const HEADER: &str = r#"{"name":"a","group":"Manual","url":"","interactive":false,"timeLimit":2000,"tests":[{"input":"1 2\n","output":"3\n"}],"testType":"single","input":{"type":"stdin","fileName":null,"pattern":null},"output":{"type":"stdout","fileName":null,"pattern":null}}"#;

    #[test]
    fn parses_header_line() {
        let task: Task = serde_json::from_str(HEADER).unwrap();
        assert_eq!(task.name, "a");
        assert_eq!(task.time_limit, 2000);
        assert_eq!(task.test_type, TestType::Single);
        assert_eq!(task.input.io_type, IOEnum::StdIn);
        assert_eq!(task.tests.len(), 1);
        assert_eq!(task.tests[0].output, "3\n");
    }

    #[test]
    fn round_trips() {
        let task: Task = serde_json::from_str(HEADER).unwrap();
        let back = serde_json::to_string(&task).unwrap();
        assert_eq!(back, HEADER);
    }
}
