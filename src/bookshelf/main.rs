//! The `bookshelf` binary. All terminal concerns live in `cli/`; this file
//! only invokes `cli::run()` and turns failures into an exit code.

mod cli;

fn main() {
    match cli::run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
