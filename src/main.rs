use std::io::Write;

fn main() {
    let out = array_heap::demo::run();
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    // a closed stdout is not a failure of the demo
    let _ = lock.write_all(out.as_bytes());
    let _ = lock.flush();
}
