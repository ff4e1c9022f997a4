// Terminal output helpers
// Progress chrome goes to stderr so stdout stays usable for result
// data; the run summary prints to stdout at its call site.

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const FAINT: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_CYAN: &str = "\x1b[1;36m";

/// Right-aligned action label, cargo style: "     Parsing build.yml"
pub fn status(action: &str, message: &str) {
    eprintln!("{BOLD_CYAN}{action:>12}{RESET} {message}");
}

/// Final success line with a checkmark
pub fn success(message: &str) {
    eprintln!("{BOLD_GREEN}  \u{2713}{RESET} {message}");
}

/// Final failure line with a cross
pub fn failure(message: &str) {
    eprintln!("{BOLD_RED}  \u{2717}{RESET} {message}");
}

/// A passed validation item
pub fn check(message: &str) {
    eprintln!("{GREEN}  \u{2713}{RESET} {message}");
}

pub fn warning(message: &str) {
    eprintln!("{YELLOW}  !{RESET} {message}");
}

pub fn error(message: &str) {
    eprintln!("{BOLD_RED}error:{RESET} {message}");
}

pub fn info(message: &str) {
    eprintln!("{CYAN}  i{RESET} {message}");
}

/// Muted detail line (captured outputs and the like)
pub fn dim(message: &str) {
    eprintln!("{FAINT}{message}{RESET}");
}

pub fn dim_success(message: &str) {
    eprintln!("{GREEN}{message}{RESET}");
}

pub fn dim_failure(message: &str) {
    eprintln!("{RED}{message}{RESET}");
}

/// Section header: "==> Workflow 'name' (2 jobs)"
pub fn header(message: &str) {
    eprintln!("{BOLD}==> {message}{RESET}");
}
