use clap::Parser;
use hostprobe::{Cli, run};
use hostprobe_types::{UNKNOWN_EXIT_CODE, UNKNOWN_WORD};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();

    let code = match run(cli) {
        Ok(severity) => severity.exit_code(),
        Err(err) => {
            // The framework only reads stdout; a probe that could not
            // produce a verdict still owes it the one summary line.
            println!("{}: {}", UNKNOWN_WORD, err);
            UNKNOWN_EXIT_CODE
        }
    };

    std::process::exit(code);
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
