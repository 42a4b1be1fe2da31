use std::env;
use std::process::ExitCode;

use fastmul::encoding::Integer;

fn run(first: &str, second: &str, third: &str) -> Result<(), fastmul::Error> {
    let first: Integer = first.parse()?;
    let second: Integer = second.parse()?;
    let third: Integer = third.parse()?;
    println!(
        "({}) * ({}) * ({}) = {}",
        first,
        second,
        third,
        first.mul3(&second, &third)?
    );
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [first, second, third] = args.as_slice() else {
        eprintln!("usage: mul3 <first> <second> <third>");
        return ExitCode::FAILURE;
    };
    match run(first, second, third) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
