use basic::mach::{Capture, Runtime};

/// Enters one line and returns what it printed. Errors are printed
/// the way the prompt shows them, one per line.
#[allow(dead_code)]
pub fn exec(runtime: &mut Runtime, s: &str) -> String {
    exec_input(runtime, s, &[])
}

/// Same as `exec` with lines queued up for INPUT.
pub fn exec_input(runtime: &mut Runtime, s: &str, input: &[&str]) -> String {
    let mut console = Capture::with_input(input.iter().copied());
    if let Err(error) = runtime.enter(&mut console, s) {
        let mut out = console.take_output();
        out.push_str(&format!("{}\n", error));
        return out;
    }
    console.take_output()
}

/// Stores every line then runs the program.
#[allow(dead_code)]
pub fn run(lines: &[&str]) -> String {
    run_input(lines, &[])
}

#[allow(dead_code)]
pub fn run_input(lines: &[&str], input: &[&str]) -> String {
    let mut r = Runtime::new(Some(1));
    for line in lines {
        assert_eq!(exec(&mut r, line), "", "entering {}", line);
    }
    exec_input(&mut r, "RUN", input)
}
