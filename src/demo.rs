use crate::heap::{build_heap_bottom_up, build_heap_top_down, heap_sort};

pub const BOTTOM_UP_INPUT: [i32; 9] = [3, 5, 1, 2, 2, 1, 1, 1, 58];
pub const TOP_DOWN_INPUT: [i32; 7] = [5, 2, 7, 3, 6, 1, 4];

/// Every element followed by a single space, then a newline.
pub fn format_line<T: std::fmt::Display>(data: &[T]) -> String {
    let mut line = String::new();
    for v in data {
        line.push_str(&format!("{v} "));
    }
    line.push('\n');
    line
}

/// Output of the demonstration run.
///
/// The heap-sort line sorts the sequence left behind by the top-down build,
/// rebuilding it bottom-up first.
pub fn run() -> String {
    let mut arr = BOTTOM_UP_INPUT.to_vec();
    let mut arr2 = TOP_DOWN_INPUT.to_vec();

    let mut out = String::new();

    build_heap_bottom_up(&mut arr);
    out.push_str(&format_line(&arr));

    build_heap_top_down(&mut arr2);
    out.push_str(&format_line(&arr2));

    build_heap_bottom_up(&mut arr2);
    heap_sort(&mut arr2);
    out.push_str(&format_line(&arr2));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!("1 2 3 \n", format_line(&[1, 2, 3]));
        assert_eq!("\n", format_line::<i32>(&[]));
    }

    #[test]
    fn test_run() {
        let expected = "58 5 1 3 2 1 1 1 2 \n7 6 5 2 3 1 4 \n1 2 3 4 5 6 7 \n";
        assert_eq!(expected, run());
    }
}
