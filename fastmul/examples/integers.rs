use std::env;
use std::process::ExitCode;

use fastmul::encoding::Integer;

fn run(first: &str, second: &str) -> Result<(), fastmul::Error> {
    let first: Integer = first.parse()?;
    let second: Integer = second.parse()?;
    println!("({}) * ({}) = {}", first, second, first.mul(&second)?);
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [first, second] = args.as_slice() else {
        eprintln!("usage: integers <first> <second>");
        return ExitCode::FAILURE;
    };
    match run(first, second) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
