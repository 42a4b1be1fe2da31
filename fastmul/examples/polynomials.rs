use std::env;
use std::process::ExitCode;

use fastmul::encoding::Polynomial;

fn run(p: &str, q: &str) -> Result<(), fastmul::Error> {
    let p: Polynomial = p.parse()?;
    let q: Polynomial = q.parse()?;
    println!("({}) * ({}) = {}", p, q, p.mul(&q));
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let [p, q] = args.as_slice() else {
        eprintln!("usage: polynomials <p> <q>   e.g. polynomials \"1+1x^1\" \"1+1x^1\"");
        return ExitCode::FAILURE;
    };
    match run(p, q) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
