//! `dotrc` - layered `.<prog>rc` defaults for command-line tools.
//!
//! Merges docopt-style arguments with built-in defaults, `~/.<prog>rc` and
//! `./.<prog>rc`, and writes config files back as JSON or YAML.

use dotrc::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
